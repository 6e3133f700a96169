//! deskchat — customer-support chat client.
//!
//! DESIGN
//! ======
//! A client library for a support assistant backend: a persisted session
//! transcript, a conversation controller that extracts final answers
//! from raw ReAct-style responses, a feedback recorder that files
//! negative ratings as support tickets, and a ticket browser. The two
//! REST collaborators (assistant endpoint and ticket store) sit behind
//! the [`net::SupportBackend`] seam.

pub mod answer;
pub mod config;
pub mod conversation;
pub mod error;
pub mod net;
pub mod state;
pub mod store;
pub mod turn;

pub use config::ClientConfig;
pub use conversation::{Conversation, DEFAULT_GREETING, FeedbackOutcome};
pub use error::ClientError;
pub use net::SupportBackend;
pub use net::api::SupportApi;
pub use net::types::{Ticket, TicketDraft};
pub use state::view::{View, ViewState};
pub use store::{FileStore, MemoryStore, SessionStore};
pub use turn::{ChatTurn, Speaker, TurnId};
