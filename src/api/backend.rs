//! Backend trait and transport errors

use async_trait::async_trait;
use reqwest::StatusCode;

use super::types::{ChatReply, ConnectInfo, QueryOutcome};

/// Transport failure talking to the assistant backend.
///
/// Non-2xx responses carry only the status; the backend's error body is not
/// parsed. Nothing here is retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("server returned HTTP {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("malformed response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// The three operations the assistant backend exposes.
///
/// The state managers only talk to this trait, so tests can script a
/// backend without a live server.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Establish a backend-side database connection.
    async fn connect(&self, uri: &str) -> Result<ConnectInfo, TransportError>;

    /// Run a literal SQL statement against the connected database.
    async fn execute_query(
        &self,
        query: &str,
        thread_id: Option<&str>,
    ) -> Result<QueryOutcome, TransportError>;

    /// Send a natural-language turn, or (with `confirm` set and an empty
    /// message) answer a previously proposed query.
    async fn chat(
        &self,
        message: &str,
        thread_id: Option<&str>,
        confirm: Option<bool>,
    ) -> Result<ChatReply, TransportError>;
}
