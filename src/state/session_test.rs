use super::*;

fn seeded() -> SessionState {
    let mut state = SessionState::new();
    state.seed("Hello! How can I help?");
    state
}

// =============================================================
// Transcript ordering and ids
// =============================================================

#[test]
fn seed_produces_single_assistant_turn() {
    let state = seeded();
    assert_eq!(state.turns().len(), 1);
    let greeting = &state.turns()[0];
    assert!(greeting.is_assistant());
    assert_eq!(greeting.display_text, "Hello! How can I help?");
    assert_eq!(greeting.raw_response.as_deref(), Some("Hello! How can I help?"));
}

#[test]
fn ids_are_strictly_increasing() {
    let mut state = seeded();
    let a = state.push_user("one");
    let b = state.push_assistant("two", "two");
    let c = state.push_user("three");
    assert!(state.turns()[0].id < a);
    assert!(a < b);
    assert!(b < c);
}

#[test]
fn insertion_order_is_display_order() {
    let mut state = seeded();
    state.push_user("q1");
    state.push_assistant("a1", "a1");
    let texts: Vec<&str> = state.turns().iter().map(|t| t.display_text.as_str()).collect();
    assert_eq!(texts, vec!["Hello! How can I help?", "q1", "a1"]);
}

#[test]
fn from_transcript_rehydrates_exactly() {
    let mut original = seeded();
    original.push_user("q");
    original.push_assistant("a", "raw a");
    let rehydrated = SessionState::from_transcript(original.turns().to_vec());
    assert_eq!(rehydrated.turns(), original.turns());
}

// =============================================================
// last_user_text
// =============================================================

#[test]
fn last_user_text_finds_most_recent_user_turn() {
    let mut state = seeded();
    assert_eq!(state.last_user_text(), None);
    state.push_user("first");
    state.push_assistant("a", "a");
    state.push_user("second");
    assert_eq!(state.last_user_text(), Some("second"));
}

// =============================================================
// Rating rules
// =============================================================

#[test]
fn greeting_alone_is_not_ratable() {
    let state = seeded();
    assert_eq!(state.ratable_turn(), None);
}

#[test]
fn only_latest_assistant_turn_is_ratable() {
    let mut state = seeded();
    state.push_user("q1");
    let a1 = state.push_assistant("a1", "a1");
    assert_eq!(state.ratable_turn(), Some(a1));
    assert!(state.can_rate(a1));

    state.push_user("q2");
    // A trailing user turn means nothing is ratable.
    assert_eq!(state.ratable_turn(), None);
    assert!(!state.can_rate(a1));

    let a2 = state.push_assistant("a2", "a2");
    assert_eq!(state.ratable_turn(), Some(a2));
}

#[test]
fn rating_is_once_per_turn() {
    let mut state = seeded();
    state.push_user("q");
    let a = state.push_assistant("a", "a");
    assert!(state.mark_rated(a));
    assert!(!state.mark_rated(a));
    assert_eq!(state.ratable_turn(), None);
}

#[test]
fn seed_resets_feedback_state() {
    let mut state = seeded();
    state.push_user("q");
    let a = state.push_assistant("a", "a");
    state.mark_rated(a);
    state.seed("fresh greeting");
    assert_eq!(state.turns().len(), 1);
    assert_eq!(state.ratable_turn(), None);
    // A new exchange is ratable again.
    state.push_user("q2");
    let b = state.push_assistant("a2", "a2");
    assert!(state.can_rate(b));
}
