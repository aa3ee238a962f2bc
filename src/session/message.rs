//! Chat transcript types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    /// A failed backend call, rendered inline in the transcript.
    Error,
}

/// Approval state of a proposed SQL statement.
///
/// `Pending` has exactly two one-way transitions: to `Approved` or to
/// `Rejected`. Both are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Pending,
    Approved,
    Rejected,
}

/// One transcript entry.
///
/// `query` and `decision` are only present on assistant entries that
/// propose an executable statement; `decision` is present iff `query` is a
/// non-empty string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            query: None,
            decision: None,
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self::new(Role::Error, content)
    }

    /// Assistant entry carrying a SQL statement that awaits approval.
    pub fn proposal(content: impl Into<String>, query: impl Into<String>) -> Self {
        let mut message = Self::new(Role::Assistant, content);
        message.query = Some(query.into());
        message.decision = Some(Decision::Pending);
        message
    }

    pub fn is_pending(&self) -> bool {
        self.decision == Some(Decision::Pending)
    }

    /// Check the decision-iff-query invariant.
    pub fn is_consistent(&self) -> bool {
        let has_query = self.query.as_deref().is_some_and(|q| !q.is_empty());
        self.decision.is_some() == has_query
    }
}
