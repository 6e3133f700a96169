use super::*;

// =============================================================
// Marker present
// =============================================================

#[test]
fn extracts_trimmed_payload() {
    let raw = "Thought: I know this.\nAction: finish(We offer 30-day refunds.)";
    assert_eq!(extract_final_answer(raw), "We offer 30-day refunds.");
}

#[test]
fn payload_whitespace_is_trimmed() {
    assert_eq!(extract_final_answer("Action: finish(  spaced out  )"), "spaced out");
    assert_eq!(extract_final_answer("Action:   finish( x )"), "x");
}

#[test]
fn payload_may_span_newlines() {
    let raw = "Action: finish(line one\nline two\nline three)";
    assert_eq!(extract_final_answer(raw), "line one\nline two\nline three");
}

#[test]
fn payload_match_is_greedy_to_last_paren() {
    // Nested parens stay inside the payload.
    let raw = "Action: finish(see section 3(b) for details)";
    assert_eq!(extract_final_answer(raw), "see section 3(b) for details");
}

#[test]
fn empty_payload_falls_back_to_raw() {
    let raw = "Action: finish()";
    assert_eq!(extract_final_answer(raw), raw);
}

// =============================================================
// Marker absent
// =============================================================

#[test]
fn no_marker_returns_raw_unchanged() {
    let raw = "I am having trouble finding a definitive answer.";
    assert_eq!(extract_final_answer(raw), raw);
}

#[test]
fn keyword_is_case_sensitive() {
    let raw = "action: finish(nope)";
    assert_eq!(extract_final_answer(raw), raw);
    let raw = "Action: Finish(nope)";
    assert_eq!(extract_final_answer(raw), raw);
}
