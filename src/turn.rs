//! Canonical conversation turn.
//!
//! DESIGN
//! ======
//! The backend and previously stored tickets use loose JSON shapes for a
//! turn: the speaker may appear under `user` or `role`, the text under
//! `message` or `content`. Everything is normalized into [`ChatTurn`] at
//! the serde boundary so downstream code never branches on field
//! spellings. Serialization emits the shape the assistant endpoint
//! already accepts as `chat_history`.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Label the human side serializes under and is rendered with.
pub const USER_LABEL: &str = "You";
/// Fixed render label for the assistant side.
pub const ASSISTANT_LABEL: &str = "AI";

/// Turn identifier: epoch milliseconds, monotonic within a transcript.
pub type TurnId = i64;

// =============================================================================
// SPEAKER
// =============================================================================

/// Who a turn is attributed to. Roles other than the two known sides are
/// preserved verbatim and rendered as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
    Other(String),
}

impl Speaker {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::User => USER_LABEL,
            Self::Assistant => ASSISTANT_LABEL,
            Self::Other(role) => role,
        }
    }

    /// Normalize a wire role value. `You`/`user` map to the human side,
    /// `AI`/`assistant` to the assistant.
    #[must_use]
    pub fn from_wire(raw: &str) -> Self {
        match raw {
            USER_LABEL | "user" => Self::User,
            ASSISTANT_LABEL | "assistant" => Self::Assistant,
            other => Self::Other(other.to_owned()),
        }
    }
}

// =============================================================================
// CHAT TURN
// =============================================================================

/// One message in the conversation. `raw_response` is carried for
/// assistant turns only: it is the unprocessed backend text, retained
/// because it is the artifact attached to feedback tickets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireTurn", into = "WireTurn")]
pub struct ChatTurn {
    pub id: TurnId,
    pub speaker: Speaker,
    pub display_text: String,
    pub raw_response: Option<String>,
}

impl ChatTurn {
    #[must_use]
    pub fn user(id: TurnId, text: &str) -> Self {
        Self { id, speaker: Speaker::User, display_text: text.to_owned(), raw_response: None }
    }

    #[must_use]
    pub fn assistant(id: TurnId, display_text: &str, raw_response: &str) -> Self {
        Self {
            id,
            speaker: Speaker::Assistant,
            display_text: display_text.to_owned(),
            raw_response: Some(raw_response.to_owned()),
        }
    }

    #[must_use]
    pub fn is_assistant(&self) -> bool {
        self.speaker == Speaker::Assistant
    }
}

// =============================================================================
// WIRE SHAPE
// =============================================================================

/// Loose wire shape for a turn. Tolerates both historical field spellings
/// on input; emits the `user`/`message` spelling on output.
#[derive(Debug, Serialize, Deserialize)]
struct WireTurn {
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<i64>,
    #[serde(rename = "fullResponse", skip_serializing_if = "Option::is_none")]
    full_response: Option<String>,
}

impl From<WireTurn> for ChatTurn {
    fn from(wire: WireTurn) -> Self {
        let speaker = wire
            .user
            .or(wire.role)
            .map_or(Speaker::Other("unknown".to_owned()), |raw| Speaker::from_wire(&raw));
        Self {
            id: wire.id.unwrap_or(0),
            speaker,
            display_text: wire.message.or(wire.content).unwrap_or_default(),
            raw_response: wire.full_response,
        }
    }
}

impl From<ChatTurn> for WireTurn {
    fn from(turn: ChatTurn) -> Self {
        Self {
            user: Some(turn.speaker.label().to_owned()),
            role: None,
            message: Some(turn.display_text),
            content: None,
            id: Some(turn.id),
            full_response: turn.raw_response,
        }
    }
}

// =============================================================================
// CLOCK
// =============================================================================

/// Current time as epoch milliseconds; 0 if the clock is before the epoch.
#[must_use]
pub fn now_ms() -> i64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

#[cfg(test)]
#[path = "turn_test.rs"]
mod tests;
