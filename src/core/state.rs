//! Application state

use std::sync::Arc;

use crate::api::{Backend, ConnectInfo};
use crate::session::{
    ConnectionManager, ConversationManager, Message, QueryManager, SessionError,
};

/// Composes the three single-owner managers over one shared backend and
/// enforces the rules that cross manager boundaries.
pub struct AppState {
    pub connection: ConnectionManager,
    pub conversation: ConversationManager,
    pub query: QueryManager,
}

impl AppState {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            connection: ConnectionManager::new(Arc::clone(&backend)),
            conversation: ConversationManager::new(Arc::clone(&backend)),
            query: QueryManager::new(backend),
        }
    }

    /// Connect to a database. A fresh connection invalidates any
    /// schema-dependent context, so transcript, thread token, and result
    /// set are cleared on success.
    pub async fn connect(&mut self, uri: &str) -> Result<ConnectInfo, SessionError> {
        let info = self.connection.connect(uri).await?;
        self.conversation.reset();
        self.query.reset();
        Ok(info)
    }

    /// Send a chat turn to the assistant.
    pub async fn send_message(&mut self, text: &str) -> Result<(), SessionError> {
        self.require_connection()?;
        self.conversation.send(text).await
    }

    /// Approve the proposal at `index`, then execute its stored statement.
    pub async fn approve(&mut self, index: usize) -> Result<(), SessionError> {
        self.require_connection()?;
        let query = self.conversation.approve(index).await?;
        self.execute_and_record(&query).await
    }

    /// Reject the proposal at `index`. Never executes anything.
    pub async fn reject(&mut self, index: usize) -> Result<(), SessionError> {
        self.require_connection()?;
        self.conversation.reject(index).await
    }

    /// Execute a statement typed directly into the SQL line.
    pub async fn run_query(&mut self, sql: &str) -> Result<(), SessionError> {
        self.require_connection()?;
        self.execute_and_record(sql).await
    }

    /// Execution failures land in the transcript the same way chat
    /// failures do, and still propagate for exit-code purposes.
    async fn execute_and_record(&mut self, sql: &str) -> Result<(), SessionError> {
        match self
            .query
            .execute(sql, self.conversation.thread_id())
            .await
        {
            Ok(thread_id) => {
                self.conversation.set_thread_id(thread_id);
                Ok(())
            }
            Err(err) => {
                if matches!(err, SessionError::Transport(_)) {
                    self.conversation
                        .push(Message::error(format!("Query failed: {err}")));
                }
                Err(err)
            }
        }
    }

    fn require_connection(&self) -> Result<(), SessionError> {
        if self.connection.is_connected() {
            Ok(())
        } else {
            Err(SessionError::NotConnected)
        }
    }
}
