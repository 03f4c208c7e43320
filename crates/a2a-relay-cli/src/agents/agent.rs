use anyhow::Result;
use async_trait::async_trait;

use a2a_relay::agent::Relay;
use a2a_relay::models::message::Message;

/// Whatever answers a single operator query; the session only sees this seam
#[async_trait]
pub trait Agent: Send + Sync {
    async fn reply(&self, query: &str) -> Result<Option<Message>>;
}

#[async_trait]
impl Agent for Relay {
    async fn reply(&self, query: &str) -> Result<Option<Message>> {
        Ok(self.ask(query).await?)
    }
}
