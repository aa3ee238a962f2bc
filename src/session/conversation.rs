//! Conversation history and the approval state machine

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::api::Backend;

use super::message::{Decision, Message};
use super::SessionError;

/// Transcript text shown alongside a proposed statement.
pub const PROPOSAL_NOTICE: &str =
    "I've generated the following SQL query. Do you want me to execute it?";

/// Owns the ordered transcript, the pending-approval state machine, and the
/// thread-continuity token.
///
/// The transcript is append-only apart from the one-way
/// pending -> approved/rejected transition on existing proposal entries.
pub struct ConversationManager {
    backend: Arc<dyn Backend>,
    history: Vec<Message>,
    thread_id: Option<String>,
    chatting: bool,
}

impl ConversationManager {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            history: Vec::new(),
            thread_id: None,
            chatting: false,
        }
    }

    pub fn history(&self) -> &[Message] {
        &self.history
    }

    pub fn thread_id(&self) -> Option<&str> {
        self.thread_id.as_deref()
    }

    pub fn is_chatting(&self) -> bool {
        self.chatting
    }

    /// Index of the most recent entry still awaiting a decision.
    pub fn latest_pending(&self) -> Option<usize> {
        self.history.iter().rposition(Message::is_pending)
    }

    /// Clear transcript and thread token, e.g. after a reconnect.
    pub fn reset(&mut self) {
        self.history.clear();
        self.thread_id = None;
        self.chatting = false;
    }

    pub(crate) fn set_thread_id(&mut self, thread_id: String) {
        self.thread_id = Some(thread_id);
    }

    pub(crate) fn push(&mut self, message: Message) {
        debug_assert!(message.is_consistent());
        self.history.push(message);
    }

    /// Send a user turn to the assistant.
    ///
    /// The user entry is appended before the network call. The resolution
    /// appends exactly one entry: a pending proposal when the backend sent a
    /// query, a plain assistant answer otherwise, or an error entry if the
    /// call failed. Transport failures are not returned; the error entry is
    /// the channel.
    pub async fn send(&mut self, text: &str) -> Result<(), SessionError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.chatting {
            return Err(SessionError::Busy("chat"));
        }

        self.push(Message::user(text));
        self.chatting = true;
        let outcome = self.backend.chat(text, self.thread_id.as_deref(), None).await;
        self.chatting = false;

        match outcome {
            Ok(reply) => {
                debug!("chat turn resolved on thread {}", reply.thread_id);
                self.thread_id = Some(reply.thread_id);
                match reply.pending_query.filter(|q| !q.is_empty()) {
                    Some(query) => self.push(Message::proposal(PROPOSAL_NOTICE, query)),
                    None => self.push(Message::assistant(reply.response)),
                }
            }
            Err(err) => {
                warn!("chat turn failed: {}", err);
                self.push(Message::error(err.to_string()));
            }
        }

        Ok(())
    }

    /// Approve the proposal at `index` and hand back its statement.
    ///
    /// Two-phase: the confirmation signal must be acknowledged before the
    /// entry turns terminal. On a failed signal the entry stays pending and
    /// the error propagates, so approval can be retried.
    pub async fn approve(&mut self, index: usize) -> Result<String, SessionError> {
        let query = self.pending_query(index)?;

        let reply = self
            .backend
            .chat("", self.thread_id.as_deref(), Some(true))
            .await?;
        self.thread_id = Some(reply.thread_id);

        self.history[index].decision = Some(Decision::Approved);
        info!("approved query at index {}", index);
        Ok(query)
    }

    /// Reject the proposal at `index`. Terminal; never executes anything.
    ///
    /// The rejection is applied locally first; the decline signal to the
    /// backend is best-effort and a failure only adds an error entry.
    pub async fn reject(&mut self, index: usize) -> Result<(), SessionError> {
        self.pending_query(index)?;

        self.history[index].decision = Some(Decision::Rejected);
        info!("rejected query at index {}", index);

        match self
            .backend
            .chat("", self.thread_id.as_deref(), Some(false))
            .await
        {
            Ok(reply) => self.thread_id = Some(reply.thread_id),
            Err(err) => {
                warn!("decline signal failed: {}", err);
                self.push(Message::error(err.to_string()));
            }
        }

        Ok(())
    }

    fn pending_query(&self, index: usize) -> Result<String, SessionError> {
        let message = self
            .history
            .get(index)
            .ok_or(SessionError::UnknownIndex(index))?;
        if !message.is_pending() {
            return Err(SessionError::NotPending(index));
        }
        message
            .query
            .clone()
            .ok_or(SessionError::NotPending(index))
    }
}
