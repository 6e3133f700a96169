//! Wire types for the support backend endpoints.
//!
//! Ticket history entries arrive in the same loose shapes the original
//! surface stored (`user`/`role`, `message`/`content`); they are
//! normalized into canonical [`ChatTurn`]s during deserialization, so a
//! fetched ticket is already in render-ready form.

use serde::{Deserialize, Serialize};

use crate::turn::ChatTurn;

// =============================================================================
// ASSISTANT ENDPOINT
// =============================================================================

/// Body of `POST /chat`.
#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub question: &'a str,
    pub chat_history: &'a [ChatTurn],
}

/// Body of the `POST /chat` response.
#[derive(Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

/// Body of the `GET /greeting` response. The greeting may be null when
/// the backend's model is unavailable.
#[derive(Debug, Deserialize)]
pub struct GreetingReply {
    pub greeting: Option<String>,
}

// =============================================================================
// TICKET STORE
// =============================================================================

/// Body of `POST /tickets/` — a ticket about to be filed.
#[derive(Debug, Clone, Serialize)]
pub struct TicketDraft {
    pub title: String,
    pub summary: String,
    pub conversation_history: Vec<ChatTurn>,
}

/// A persisted ticket as returned by the server. Immutable from the
/// client's view once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub user_contact: Option<String>,
    /// Opaque server timestamp; never sorted or computed with client-side.
    pub created_at: String,
    #[serde(default)]
    pub conversation_history: Vec<ChatTurn>,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
