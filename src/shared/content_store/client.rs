// src/shared/content_store/client.rs

use async_trait::async_trait;
use serde_json::Value;

/// Connection details for the hosted content store's query endpoint.
#[derive(Debug, Clone)]
pub struct ContentStoreConfig {
    pub query_url: String,
    pub token: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContentStoreError {
    #[error("Content store unreachable: {0}")]
    Unreachable(String),

    #[error("Content store returned status {0}")]
    Status(u16),

    #[error("Malformed content store response: {0}")]
    Decode(String),
}

/// Seam between adapters and the wire. Production uses
/// [`HttpQueryExecutor`]; tests feed canned payloads through a fake.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    /// Runs a query expression with named parameters and returns the
    /// `result` payload. Parameters are JSON-encoded, so a string slug
    /// arrives quoted on the wire.
    async fn query(&self, expression: &str, params: &[(&str, Value)])
        -> Result<Value, ContentStoreError>;
}

pub struct HttpQueryExecutor {
    config: ContentStoreConfig,
    http: reqwest::Client,
}

impl HttpQueryExecutor {
    pub fn new(config: ContentStoreConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl QueryExecutor for HttpQueryExecutor {
    async fn query(
        &self,
        expression: &str,
        params: &[(&str, Value)],
    ) -> Result<Value, ContentStoreError> {
        let mut request = self
            .http
            .get(&self.config.query_url)
            .query(&[("query", expression)]);

        for (name, value) in params {
            request = request.query(&[(format!("${name}"), value.to_string())]);
        }

        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|err| ContentStoreError::Unreachable(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentStoreError::Status(status.as_u16()));
        }

        let envelope: Value = response
            .json()
            .await
            .map_err(|err| ContentStoreError::Decode(err.to_string()))?;

        envelope
            .get("result")
            .cloned()
            .ok_or_else(|| ContentStoreError::Decode("missing result field".to_string()))
    }
}
