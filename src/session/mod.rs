//! Session state management

pub mod connection;
pub mod conversation;
pub mod message;
pub mod query;

pub use connection::ConnectionManager;
pub use conversation::{ConversationManager, PROPOSAL_NOTICE};
pub use message::{Decision, Message, Role};
pub use query::QueryManager;

use crate::api::TransportError;

/// Errors surfaced by the state managers.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("input is empty")]
    EmptyInput,

    #[error("no message at index {0}")]
    UnknownIndex(usize),

    #[error("message {0} has no approval pending")]
    NotPending(usize),

    #[error("not connected to a database")]
    NotConnected,

    #[error("a {0} request is already in flight")]
    Busy(&'static str),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
