//! Assistant backend HTTP client

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, error};

use super::backend::{Backend, TransportError};
use super::types::{ChatReply, ConnectInfo, QueryOutcome};

/// HTTP implementation of [`Backend`] against a configurable base URL.
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ConnectRequest<'a> {
    uri: &'a str,
}

#[derive(Debug, Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    thread_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confirm_execution: Option<bool>,
}

impl HttpBackend {
    /// Create a new client with timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .connect_timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new()); // Fallback if config fails

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + std::fmt::Debug,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);

        debug!("POST {}: {:?}", url, body);

        let response = match self.client.post(&url).json(body).send().await {
            Ok(r) => r,
            Err(e) => {
                error!("backend request to {} failed: {}", path, e);
                return Err(TransportError::Network(e));
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            error!("backend returned {} for {}", status, path);
            return Err(TransportError::Status(status));
        }

        response.json().await.map_err(TransportError::Decode)
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn connect(&self, uri: &str) -> Result<ConnectInfo, TransportError> {
        let info: ConnectInfo = self.post("/connect", &ConnectRequest { uri }).await?;
        debug!(
            "connected: dialect={}, {} tables",
            info.dialect,
            info.schema.len()
        );
        Ok(info)
    }

    async fn execute_query(
        &self,
        query: &str,
        thread_id: Option<&str>,
    ) -> Result<QueryOutcome, TransportError> {
        self.post("/query", &QueryRequest { query, thread_id }).await
    }

    async fn chat(
        &self,
        message: &str,
        thread_id: Option<&str>,
        confirm: Option<bool>,
    ) -> Result<ChatReply, TransportError> {
        self.post(
            "/chat",
            &ChatRequest {
                message,
                thread_id,
                confirm_execution: confirm,
            },
        )
        .await
    }
}

impl Default for HttpBackend {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
