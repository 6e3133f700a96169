//! REST collaborators — the assistant endpoint and the ticket store.

pub mod api;
pub mod types;

use crate::error::ClientError;
use crate::turn::ChatTurn;
use types::{Ticket, TicketDraft};

/// Backend seam over the two REST collaborators. Enables mocking in tests.
#[async_trait::async_trait]
pub trait SupportBackend: Send + Sync {
    /// Fetch the opening greeting.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the greeting field is
    /// missing or null; callers degrade to a static default.
    async fn greeting(&self) -> Result<String, ClientError>;

    /// Send a question together with the conversation so far and return
    /// the raw assistant response.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the response field is
    /// missing.
    async fn chat(&self, question: &str, history: &[ChatTurn]) -> Result<String, ClientError>;

    /// Fetch all tickets, in server order.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body is malformed.
    async fn list_tickets(&self) -> Result<Vec<Ticket>, ClientError>;

    /// Fetch a single ticket by id.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails, the ticket does not
    /// exist, or the body is malformed.
    async fn fetch_ticket(&self, ticket_id: i64) -> Result<Ticket, ClientError>;

    /// File a new ticket and return the created record.
    ///
    /// # Errors
    ///
    /// Returns an error when the request fails or the body is malformed.
    async fn create_ticket(&self, draft: &TicketDraft) -> Result<Ticket, ClientError>;
}
