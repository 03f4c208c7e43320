use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Author of a conversation entry
pub enum Role {
    User,
    Assistant,
    /// Output of a tool call made on behalf of the assistant
    Tool,
}
