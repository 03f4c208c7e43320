//! A2A protocol wire types.
//!
//! Only the subset the relay sends or reads is modelled. Field names are camelCase on the
//! wire; unknown fields are ignored so newer agents can still be decoded.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::A2AError;

pub const JSONRPC_VERSION: &str = "2.0";
pub const SEND_MESSAGE_METHOD: &str = "message/send";

/// Capability descriptor published by a remote agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCard {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Endpoint that accepts JSON-RPC requests
    pub url: String,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub capabilities: Option<AgentCapabilities>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentCapabilities {
    #[serde(default)]
    pub streaming: bool,
    #[serde(default)]
    pub push_notifications: bool,
    #[serde(default)]
    pub state_transition_history: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Agent,
}

/// Smallest unit of content inside a message or artifact.
///
/// Kinds this relay does not know decode as `Other` so the rest of the reply survives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Part {
    Text { text: String },
    File { file: Value },
    Data { data: Value },
    #[serde(other)]
    Other,
}

impl Part {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Part::Text { text } => Some(text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub role: MessageRole,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub message_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_id: Option<String>,
    #[serde(default = "message_kind")]
    pub kind: String,
}

fn message_kind() -> String {
    "message".to_string()
}

impl Message {
    /// A user message with a single text part and a fresh message id
    pub fn user_text<S: Into<String>>(text: S) -> Self {
        Message {
            role: MessageRole::User,
            parts: vec![Part::text(text)],
            message_id: uuid::Uuid::new_v4().simple().to_string(),
            task_id: None,
            context_id: None,
            kind: message_kind(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artifact {
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatus {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
    #[serde(default)]
    pub timestamp: Option<String>,
}

/// The `result` of a `message/send` call.
///
/// Agents may answer with artifacts, with messages, or with a status update, so every
/// shape is optional. A task result also carries its `history`, which includes the user's
/// own outbound message. The raw value is kept for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteResult {
    #[serde(default)]
    pub artifacts: Option<Vec<Artifact>>,
    #[serde(default)]
    pub messages: Option<Vec<Message>>,
    #[serde(default)]
    pub history: Option<Vec<Message>>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(skip)]
    pub raw: Value,
}

impl RemoteResult {
    pub fn from_value(value: Value) -> Result<Self, A2AError> {
        let mut result: RemoteResult =
            serde_json::from_value(value.clone()).map_err(|e| A2AError::Decode(e.to_string()))?;
        result.raw = value;
        Ok(result)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageSendParams {
    pub message: Message,
}

/// JSON-RPC envelope for `message/send`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendMessageRequest {
    pub jsonrpc: String,
    pub id: String,
    pub method: String,
    pub params: MessageSendParams,
}

impl SendMessageRequest {
    /// Wrap a message in a request with a fresh request id
    pub fn new(message: Message) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id: uuid::Uuid::new_v4().to_string(),
            method: SEND_MESSAGE_METHOD.to_string(),
            params: MessageSendParams { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub error: Option<JsonRpcError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_message_request_wire_format() -> anyhow::Result<()> {
        let request = SendMessageRequest::new(Message::user_text("hello"));
        let value = serde_json::to_value(&request)?;

        assert_eq!(value["jsonrpc"], "2.0");
        assert_eq!(value["method"], "message/send");
        assert_eq!(value["params"]["message"]["role"], "user");
        assert_eq!(value["params"]["message"]["kind"], "message");
        assert_eq!(
            value["params"]["message"]["parts"],
            json!([{"kind": "text", "text": "hello"}])
        );
        assert!(value["params"]["message"]["messageId"].is_string());
        assert!(value["params"]["message"].get("taskId").is_none());
        Ok(())
    }

    #[test]
    fn test_request_ids_are_unique() {
        let first = SendMessageRequest::new(Message::user_text("a"));
        let second = SendMessageRequest::new(Message::user_text("a"));

        assert_ne!(first.id, second.id);
        assert_ne!(
            first.params.message.message_id,
            second.params.message.message_id
        );
    }

    #[test]
    fn test_remote_result_accepts_task_history() -> anyhow::Result<()> {
        let result = RemoteResult::from_value(json!({
            "id": "task-1",
            "kind": "task",
            "history": [
                {"role": "agent", "messageId": "m1", "parts": [{"kind": "text", "text": "hi"}]}
            ],
            "status": {"state": "completed"}
        }))?;

        assert_eq!(result.history.as_ref().map(Vec::len), Some(1));
        assert!(result.messages.is_none());
        assert!(result.artifacts.is_none());
        assert_eq!(
            result.status.and_then(|status| status.state),
            Some("completed".to_string())
        );
        assert_eq!(result.raw["id"], "task-1");
        Ok(())
    }

    #[test]
    fn test_remote_result_non_text_parts() -> anyhow::Result<()> {
        let result = RemoteResult::from_value(json!({
            "artifacts": [{"parts": [
                {"kind": "data", "data": {"answer": 42}},
                {"kind": "file", "file": {"uri": "file:///tmp/a.txt"}}
            ]}]
        }))?;

        let parts = &result.artifacts.unwrap()[0].parts;
        assert!(parts.iter().all(|part| part.as_text().is_none()));
        Ok(())
    }

    #[test]
    fn test_unknown_part_kind_is_kept_as_other() -> anyhow::Result<()> {
        let result = RemoteResult::from_value(json!({
            "artifacts": [{"parts": [
                {"kind": "text", "text": "answer"},
                {"kind": "video", "uri": "https://example.com/clip.mp4"}
            ]}]
        }))?;

        let parts = &result.artifacts.unwrap()[0].parts;
        assert_eq!(parts[0].as_text(), Some("answer"));
        assert_eq!(parts[1], Part::Other);
        assert_eq!(parts[1].as_text(), None);
        Ok(())
    }

    #[test]
    fn test_messages_and_history_side_by_side() -> anyhow::Result<()> {
        let result = RemoteResult::from_value(json!({
            "messages": [{"role": "agent", "parts": [{"kind": "text", "text": "reply"}]}],
            "history": [{"role": "user", "parts": [{"kind": "text", "text": "question"}]}]
        }))?;

        assert_eq!(result.messages.map(|m| m.len()), Some(1));
        assert_eq!(result.history.map(|h| h.len()), Some(1));
        Ok(())
    }

    #[test]
    fn test_agent_card_minimal() -> anyhow::Result<()> {
        let card: AgentCard = serde_json::from_value(json!({
            "name": "Research Agent",
            "url": "http://localhost:10000/",
            "capabilities": {"streaming": true},
            "skills": []
        }))?;

        assert_eq!(card.name, "Research Agent");
        assert!(card.capabilities.unwrap().streaming);
        assert!(card.description.is_none());
        Ok(())
    }
}
