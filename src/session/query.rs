//! Query execution state

use std::sync::Arc;

use tracing::debug;

use crate::api::{Backend, Row};

use super::SessionError;

/// Owns the current result set, replaced wholesale on each successful
/// execution.
pub struct QueryManager {
    backend: Arc<dyn Backend>,
    querying: bool,
    rows: Vec<Row>,
}

impl QueryManager {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            querying: false,
            rows: Vec::new(),
        }
    }

    pub fn is_querying(&self) -> bool {
        self.querying
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Clear the result set, e.g. after a reconnect.
    pub fn reset(&mut self) {
        self.rows.clear();
    }

    /// Execute a statement. On success the result set is replaced and the
    /// (possibly backend-assigned) thread id is returned; on failure the
    /// previous rows are left untouched.
    pub async fn execute(
        &mut self,
        query: &str,
        thread_id: Option<&str>,
    ) -> Result<String, SessionError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.querying {
            return Err(SessionError::Busy("query"));
        }

        self.querying = true;
        let outcome = self.backend.execute_query(query, thread_id).await;
        self.querying = false;

        let outcome = outcome?;
        debug!("query resolved with {} rows", outcome.result.len());
        self.rows = outcome.result;
        Ok(outcome.thread_id)
    }
}
