//! Wire types for the assistant backend

use std::collections::BTreeMap;

use serde::Deserialize;

/// A result row: column name -> scalar value, in the order the backend
/// returned the columns.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Response of `POST /connect`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectInfo {
    pub message: String,
    pub dialect: String,
    /// Table name -> ordered column names, case preserved as received.
    pub schema: BTreeMap<String, Vec<String>>,
}

/// Response of `POST /query`.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryOutcome {
    pub result: Vec<Row>,
    pub thread_id: String,
}

/// Response of `POST /chat`.
///
/// Either a direct textual answer, or a proposed SQL statement in
/// `pending_query` awaiting explicit confirmation before execution.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub thread_id: String,
    #[serde(default)]
    pub requires_confirmation: bool,
    #[serde(default)]
    pub pending_query: Option<String>,
}
