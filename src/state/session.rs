//! Session state — the ordered transcript plus feedback bookkeeping.
//!
//! DESIGN
//! ======
//! Insertion order is display order. Turn ids are epoch milliseconds,
//! bumped past the previous id when two turns land in the same
//! millisecond. The rated set is session-local and deliberately not
//! persisted: a reloaded transcript starts with fresh feedback controls.

use std::collections::HashSet;

use crate::turn::{ChatTurn, Speaker, TurnId, now_ms};

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    conversation: Vec<ChatTurn>,
    feedback_given: HashSet<TurnId>,
}

impl SessionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rehydrate from a persisted transcript. Feedback state starts empty.
    #[must_use]
    pub fn from_transcript(conversation: Vec<ChatTurn>) -> Self {
        Self { conversation, feedback_given: HashSet::new() }
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        &self.conversation
    }

    #[must_use]
    pub fn turn(&self, id: TurnId) -> Option<&ChatTurn> {
        self.conversation.iter().find(|turn| turn.id == id)
    }

    /// Replace everything with a single assistant greeting turn and reset
    /// feedback state.
    pub fn seed(&mut self, greeting: &str) -> TurnId {
        self.conversation.clear();
        self.feedback_given.clear();
        self.push_assistant(greeting, greeting)
    }

    pub fn push_user(&mut self, text: &str) -> TurnId {
        let id = self.next_id();
        self.conversation.push(ChatTurn::user(id, text));
        id
    }

    pub fn push_assistant(&mut self, display_text: &str, raw_response: &str) -> TurnId {
        let id = self.next_id();
        self.conversation.push(ChatTurn::assistant(id, display_text, raw_response));
        id
    }

    /// Text of the most recent user turn, if any.
    #[must_use]
    pub fn last_user_text(&self) -> Option<&str> {
        self.conversation
            .iter()
            .rev()
            .find(|turn| turn.speaker == Speaker::User)
            .map(|turn| turn.display_text.as_str())
    }

    /// The turn feedback controls are currently offered for: the most
    /// recent turn, when it is an assistant answer (never the opening
    /// greeting) that has not been rated yet.
    #[must_use]
    pub fn ratable_turn(&self) -> Option<TurnId> {
        if self.conversation.len() < 2 {
            return None;
        }
        self.conversation
            .last()
            .filter(|turn| turn.is_assistant() && !self.feedback_given.contains(&turn.id))
            .map(|turn| turn.id)
    }

    #[must_use]
    pub fn can_rate(&self, id: TurnId) -> bool {
        self.ratable_turn() == Some(id)
    }

    /// Mark a turn as rated. Returns `false` if it was already marked.
    pub fn mark_rated(&mut self, id: TurnId) -> bool {
        self.feedback_given.insert(id)
    }

    fn next_id(&self) -> TurnId {
        let floor = self.conversation.last().map_or(TurnId::MIN, |turn| turn.id.saturating_add(1));
        now_ms().max(floor)
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
