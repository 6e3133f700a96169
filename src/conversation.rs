//! Conversation controller — session seeding, question flow, feedback
//! tickets.
//!
//! DESIGN
//! ======
//! Owns the session state as an explicit object rather than ambient
//! globals: backend seam + store + transcript. Every transcript mutation
//! is written through to the store; persistence failures are logged and
//! absorbed (the session keeps working in memory). Greeting failures
//! degrade to a static default. Chat and ticket failures surface to the
//! caller; there are no retries.

use std::sync::Arc;

use tracing::{info, warn};

use crate::answer::extract_final_answer;
use crate::error::ClientError;
use crate::net::SupportBackend;
use crate::net::types::{Ticket, TicketDraft};
use crate::state::session::SessionState;
use crate::store::SessionStore;
use crate::turn::{ChatTurn, TurnId};

/// Greeting used when the backend cannot provide one.
pub const DEFAULT_GREETING: &str = "Hello! How can I help?";

/// Ticket title used when no user turn precedes the rated answer.
pub const FALLBACK_TICKET_TITLE: &str = "Feedback Ticket";

/// What became of a feedback event.
#[derive(Debug)]
pub enum FeedbackOutcome {
    /// Positive feedback recorded; no network effect.
    Recorded,
    /// Negative feedback recorded and a ticket was filed.
    TicketFiled(Ticket),
    /// The turn was not ratable (already rated, or not the latest
    /// assistant answer); nothing happened.
    Ignored,
}

pub struct Conversation<S: SessionStore> {
    backend: Arc<dyn SupportBackend>,
    store: S,
    state: SessionState,
}

impl<S: SessionStore> Conversation<S> {
    /// Open a session: rehydrate the persisted transcript if one exists,
    /// otherwise seed with a fresh greeting.
    pub async fn open(backend: Arc<dyn SupportBackend>, store: S) -> Self {
        let persisted = match store.load() {
            Ok(turns) => turns,
            Err(error) => {
                warn!(error = %error, "session load failed; starting fresh");
                None
            }
        };

        let mut conversation = Self { backend, store, state: SessionState::new() };
        match persisted.filter(|turns| !turns.is_empty()) {
            Some(turns) => conversation.state = SessionState::from_transcript(turns),
            None => conversation.reseed().await,
        }
        conversation
    }

    /// Submit a question. Whitespace-only input is a no-op: no turn is
    /// appended and no request is sent.
    ///
    /// On success returns the id of the new assistant turn. On failure
    /// the user turn remains in the transcript but no assistant turn is
    /// appended.
    ///
    /// # Errors
    ///
    /// Returns the backend error when the chat request fails.
    pub async fn submit_question(&mut self, question: &str) -> Result<Option<TurnId>, ClientError> {
        if question.trim().is_empty() {
            return Ok(None);
        }

        self.state.push_user(question);
        self.persist();

        // The transmitted history includes the just-appended user turn.
        let raw = self.backend.chat(question, self.state.turns()).await?;
        let display = extract_final_answer(&raw).to_owned();
        let id = self.state.push_assistant(&display, &raw);
        self.persist();
        Ok(Some(id))
    }

    /// Record feedback for a turn. Only the latest unrated assistant
    /// answer is ratable; anything else is ignored. The turn is marked
    /// rated before any network effect, so repeats are no-ops even when
    /// the ticket post fails.
    ///
    /// # Errors
    ///
    /// Returns the backend error when filing the feedback ticket fails.
    pub async fn record_feedback(
        &mut self,
        id: TurnId,
        is_positive: bool,
    ) -> Result<FeedbackOutcome, ClientError> {
        if !self.state.can_rate(id) {
            return Ok(FeedbackOutcome::Ignored);
        }
        self.state.mark_rated(id);

        if is_positive {
            return Ok(FeedbackOutcome::Recorded);
        }

        let draft = self.ticket_draft(id);
        let ticket = self.backend.create_ticket(&draft).await?;
        info!(ticket_id = ticket.id, "feedback ticket filed");
        Ok(FeedbackOutcome::TicketFiled(ticket))
    }

    /// Discard the transcript and re-seed with a fresh greeting,
    /// resetting feedback state.
    pub async fn clear(&mut self) {
        self.reseed().await;
    }

    #[must_use]
    pub fn turns(&self) -> &[ChatTurn] {
        self.state.turns()
    }

    #[must_use]
    pub fn turn(&self, id: TurnId) -> Option<&ChatTurn> {
        self.state.turn(id)
    }

    /// The turn feedback controls should currently be offered for.
    #[must_use]
    pub fn ratable_turn(&self) -> Option<TurnId> {
        self.state.ratable_turn()
    }

    async fn reseed(&mut self) {
        let greeting = match self.backend.greeting().await {
            Ok(greeting) => greeting,
            Err(error) => {
                warn!(error = %error, "greeting fetch failed; using default");
                DEFAULT_GREETING.to_owned()
            }
        };
        self.state.seed(&greeting);
        self.persist();
    }

    fn ticket_draft(&self, rated: TurnId) -> TicketDraft {
        let summary = self.state.turn(rated).map_or_else(String::new, |turn| {
            turn.raw_response.clone().unwrap_or_else(|| turn.display_text.clone())
        });
        TicketDraft {
            title: self.state.last_user_text().unwrap_or(FALLBACK_TICKET_TITLE).to_owned(),
            summary,
            conversation_history: self.state.turns().to_vec(),
        }
    }

    fn persist(&self) {
        if let Err(error) = self.store.save(self.state.turns()) {
            warn!(error = %error, "session persist failed");
        }
    }
}

#[cfg(test)]
#[path = "conversation_test.rs"]
mod tests;
