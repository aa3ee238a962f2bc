//! Connection state

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{Backend, ConnectInfo};

use super::SessionError;

/// Owns the connected/disconnected flag, the schema mapping, and the
/// dialect reported by the backend.
pub struct ConnectionManager {
    backend: Arc<dyn Backend>,
    connected: bool,
    connecting: bool,
    schema: BTreeMap<String, Vec<String>>,
    dialect: Option<String>,
}

impl ConnectionManager {
    pub fn new(backend: Arc<dyn Backend>) -> Self {
        Self {
            backend,
            connected: false,
            connecting: false,
            schema: BTreeMap::new(),
            dialect: None,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn is_connecting(&self) -> bool {
        self.connecting
    }

    /// Table name -> ordered column names, as received from the backend.
    pub fn schema(&self) -> &BTreeMap<String, Vec<String>> {
        &self.schema
    }

    pub fn dialect(&self) -> Option<&str> {
        self.dialect.as_deref()
    }

    /// Issue the connect call once. Success stores all fields; failure
    /// resets to a disconnected, empty state and propagates the error.
    pub async fn connect(&mut self, uri: &str) -> Result<ConnectInfo, SessionError> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(SessionError::EmptyInput);
        }
        if self.connecting {
            return Err(SessionError::Busy("connect"));
        }

        self.connecting = true;
        let outcome = self.backend.connect(uri).await;
        self.connecting = false;

        match outcome {
            Ok(info) => {
                info!(
                    "connected: dialect={}, {} tables",
                    info.dialect,
                    info.schema.len()
                );
                self.connected = true;
                self.schema = info.schema.clone();
                self.dialect = Some(info.dialect.clone());
                Ok(info)
            }
            Err(err) => {
                warn!("connection failed: {}", err);
                self.connected = false;
                self.schema.clear();
                self.dialect = None;
                Err(err.into())
            }
        }
    }
}
