use anyhow::Result;
use std::future::Future;
use std::pin::Pin;

use a2a_relay::models::message::Message;

use crate::agents::agent::Agent;
use crate::prompt::{InputType, Prompt};

const TEST_QUERIES: [&str; 3] = [
    "What are the latest developments in artificial intelligence?",
    "Find me recent papers on transformer architectures",
    "What information is available about federal student loan programs?",
];

/// Resolves when the operator interrupts a running turn
pub type Interrupt<'a> = Box<dyn Fn() -> Pin<Box<dyn Future<Output = ()>>> + 'a>;

pub struct Session<'a> {
    agent: Box<dyn Agent + 'a>,
    prompt: Box<dyn Prompt + 'a>,
    remote_url: String,
    interrupt: Interrupt<'a>,
}

fn ctrl_c() -> Pin<Box<dyn Future<Output = ()>>> {
    Box::pin(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Unable to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    })
}

impl<'a> Session<'a> {
    pub fn new(
        agent: Box<dyn Agent + 'a>,
        prompt: Box<dyn Prompt + 'a>,
        remote_url: impl Into<String>,
    ) -> Self {
        Session {
            agent,
            prompt,
            remote_url: remote_url.into(),
            interrupt: Box::new(ctrl_c),
        }
    }

    pub fn with_interrupt(mut self, interrupt: Interrupt<'a>) -> Self {
        self.interrupt = interrupt;
        self
    }

    /// Read queries until the operator quits. Each query is a fresh conversation.
    pub async fn start(&mut self) -> Result<()> {
        self.prompt.relay_ready(&self.remote_url);

        loop {
            let input = self.prompt.get_input()?;
            match input.input_type {
                InputType::Message => {
                    if let Some(content) = &input.content {
                        if !self.process_query(content).await {
                            break;
                        }
                    }
                }
                InputType::Exit => break,
                InputType::AskAgain => continue,
            }
        }

        self.prompt.render(raw_message("Goodbye! 👋"));
        Ok(())
    }

    /// Run the fixed test queries once each; a failure does not stop the batch,
    /// an interrupt does
    pub async fn batch_start(&mut self) {
        for (i, query) in TEST_QUERIES.iter().enumerate() {
            self.prompt
                .render(raw_message(&format!("Test {}: {}", i + 1, query)));
            self.prompt.render(raw_message("🔄 Processing..."));

            let line = match self.reply_or_interrupt(query).await {
                Some(Ok(reply)) => format!("🤖 Response: {}", reply_text(reply.as_ref())),
                Some(Err(e)) => format!("❌ Error: {}", e),
                None => {
                    self.prompt.render(raw_message("Goodbye! 👋"));
                    return;
                }
            };
            self.prompt.render(raw_message(&line));
            self.prompt.render(raw_message(&"-".repeat(50)));
        }
    }

    /// Returns false when the turn was interrupted and the session should end
    async fn process_query(&mut self, query: &str) -> bool {
        self.prompt.show_busy();
        let reply = self.reply_or_interrupt(query).await;
        self.prompt.hide_busy();

        let line = match reply {
            Some(Ok(reply)) => match reply_text(reply.as_ref()) {
                text if text.is_empty() => "🤖 No response received".to_string(),
                text => format!("🤖 A2A Agent: {}", text),
            },
            Some(Err(e)) => format!("❌ Error: {}", e),
            None => return false,
        };
        self.prompt.render(raw_message(&line));
        true
    }

    /// `None` when the operator interrupted the pending reply
    async fn reply_or_interrupt(&self, query: &str) -> Option<Result<Option<Message>>> {
        tokio::select! {
            reply = self.agent.reply(query) => Some(reply),
            _ = (self.interrupt)() => None,
        }
    }
}

fn reply_text(reply: Option<&Message>) -> String {
    reply.map(Message::text).unwrap_or_default()
}

fn raw_message(content: &str) -> Box<Message> {
    Box::new(Message::assistant().with_text(content))
}
