pub mod client;
pub mod configs;
pub mod extract;
pub mod types;

use async_trait::async_trait;
use thiserror::Error;

use self::types::RemoteResult;

#[derive(Error, Debug)]
pub enum A2AError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid agent address: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("JSON-RPC error {code}: {message}")]
    JsonRpc { code: i64, message: String },

    #[error("Could not decode agent response: {0}")]
    Decode(String),

    #[error("Agent response contained neither a result nor an error")]
    EmptyResponse,
}

/// A remote agent that answers one text query per request/response exchange
#[async_trait]
pub trait RemoteAgent: Send + Sync {
    /// Send `query` as a single user message and return the structured result
    async fn send_query(&self, query: &str) -> Result<RemoteResult, A2AError>;
}
