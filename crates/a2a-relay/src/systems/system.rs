use async_trait::async_trait;

use crate::errors::AgentResult;
use crate::models::content::Content;
use crate::models::tool::{Tool, ToolCall};

/// Core trait for a provider of tools the action step can dispatch to
#[async_trait]
pub trait System: Send + Sync {
    /// Get the name of the system
    fn name(&self) -> &str;

    /// Get available tools
    fn tools(&self) -> &[Tool];

    /// Call a tool with the given arguments
    async fn call(&self, tool_call: ToolCall) -> AgentResult<Vec<Content>>;
}
