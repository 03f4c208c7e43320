use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use a2a_relay::models::message::Message;

use crate::agents::agent::Agent;

pub enum MockReply {
    Echo,
    Nothing,
    Fail,
    /// Never answers
    Hang,
}

pub struct MockAgent {
    reply: MockReply,
    calls: Arc<AtomicUsize>,
}

impl MockAgent {
    pub fn new(reply: MockReply) -> Self {
        Self {
            reply,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared counter of `reply` invocations
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl Agent for MockAgent {
    async fn reply(&self, query: &str) -> Result<Option<Message>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.reply {
            MockReply::Echo => Ok(Some(
                Message::tool().with_text(format!("echo: {}", query)),
            )),
            MockReply::Nothing => Ok(None),
            MockReply::Fail => Err(anyhow!("agent unavailable")),
            MockReply::Hang => {
                std::future::pending::<()>().await;
                Ok(None)
            }
        }
    }
}
