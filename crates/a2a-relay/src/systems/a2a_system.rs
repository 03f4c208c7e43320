use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::error;

use super::System;
use crate::a2a::extract::{extract, DiagnosticSink, LogSink};
use crate::a2a::RemoteAgent;
use crate::errors::{AgentError, AgentResult};
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};

pub const QUERY_A2A_AGENT: &str = "query_a2a_agent";
pub const A2A_ERROR_PREFIX: &str = "Error communicating with A2A agent:";

/// Exposes a remote A2A agent as the `query_a2a_agent` tool
pub struct A2ASystem {
    remote: Box<dyn RemoteAgent>,
    sink: Box<dyn DiagnosticSink>,
    tools: Vec<Tool>,
}

impl A2ASystem {
    pub fn new(remote: Box<dyn RemoteAgent>) -> Self {
        Self::with_sink(remote, Box::new(LogSink))
    }

    pub fn with_sink(remote: Box<dyn RemoteAgent>, sink: Box<dyn DiagnosticSink>) -> Self {
        Self {
            remote,
            sink,
            tools: vec![Tool::new(
                QUERY_A2A_AGENT,
                "Send a question or request to the remote A2A agent and return its answer",
                json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "The question or request to send to the A2A agent"
                        }
                    },
                    "required": ["query"]
                }),
            )],
        }
    }

    /// Run one exchange with the remote agent. Failures come back as text.
    pub async fn query(&self, query: &str) -> String {
        match self.remote.send_query(query).await {
            Ok(result) => extract(&result, self.sink.as_ref()),
            Err(e) => {
                error!("{} {}", A2A_ERROR_PREFIX, e);
                format!("{} {}", A2A_ERROR_PREFIX, e)
            }
        }
    }

    fn query_argument(arguments: &Value) -> AgentResult<&str> {
        arguments
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| AgentError::InvalidParameters("query parameter required".into()))
    }
}

#[async_trait]
impl System for A2ASystem {
    fn name(&self) -> &str {
        "a2a"
    }

    fn tools(&self) -> &[Tool] {
        &self.tools
    }

    async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>> {
        match tool_call.name.as_str() {
            QUERY_A2A_AGENT => {
                let query = Self::query_argument(&tool_call.arguments)?;
                Ok(vec![Content::text(self.query(query).await)])
            }
            _ => Err(AgentError::ToolNotFound(tool_call.name)),
        }
    }
}
