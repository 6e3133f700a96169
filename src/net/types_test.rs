use super::*;
use crate::turn::Speaker;

// =============================================================
// ChatRequest
// =============================================================

#[test]
fn chat_request_serializes_expected_fields() {
    let history = vec![
        ChatTurn::assistant(1, "Hello! How can I help?", "Hello! How can I help?"),
        ChatTurn::user(2, "refund policy?"),
    ];
    let request = ChatRequest { question: "refund policy?", chat_history: &history };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["question"], "refund policy?");
    assert_eq!(value["chat_history"].as_array().unwrap().len(), 2);
    assert_eq!(value["chat_history"][1]["user"], "You");
    assert_eq!(value["chat_history"][1]["message"], "refund policy?");
}

// =============================================================
// TicketDraft
// =============================================================

#[test]
fn ticket_draft_serializes_expected_fields() {
    let draft = TicketDraft {
        title: "How do I reset my password?".to_owned(),
        summary: "I don't know".to_owned(),
        conversation_history: vec![ChatTurn::user(1, "How do I reset my password?")],
    };
    let value = serde_json::to_value(&draft).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["title", "summary", "conversation_history"]);
}

// =============================================================
// Ticket deserialization
// =============================================================

#[test]
fn ticket_with_heterogeneous_history_normalizes() {
    let json = r#"{
        "id": 4,
        "title": "How do I reset my password?",
        "summary": "I don't know",
        "created_at": "2024-05-01T12:00:00",
        "conversation_history": [
            { "user": "You", "message": "How do I reset my password?", "id": 10 },
            { "role": "assistant", "content": "I don't know" },
            { "role": "system", "content": "internal note" }
        ]
    }"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.id, 4);
    assert_eq!(ticket.summary.as_deref(), Some("I don't know"));
    let turns = &ticket.conversation_history;
    assert_eq!(turns[0].speaker, Speaker::User);
    assert_eq!(turns[1].speaker, Speaker::Assistant);
    assert_eq!(turns[1].display_text, "I don't know");
    assert_eq!(turns[2].speaker, Speaker::Other("system".to_owned()));
    assert_eq!(turns[2].speaker.label(), "system");
}

#[test]
fn ticket_optional_fields_default() {
    let json = r#"{ "id": 1, "title": "t", "created_at": "2024-01-01T00:00:00" }"#;
    let ticket: Ticket = serde_json::from_str(json).unwrap();
    assert_eq!(ticket.summary, None);
    assert_eq!(ticket.user_contact, None);
    assert!(ticket.conversation_history.is_empty());
}
