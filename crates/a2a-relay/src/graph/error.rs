use thiserror::Error;

use crate::errors::AgentError;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("node not found: {0}")]
    NodeNotFound(String),

    #[error("graph has no entry point")]
    MissingEntryPoint,

    #[error("node {0} already has outgoing edges")]
    DuplicateEdges(String),

    #[error("router for node {node} returned unmapped key {key}")]
    UnknownRoute { node: String, key: String },

    #[error("recursion limit of {0} steps reached")]
    RecursionLimit(usize),

    #[error(transparent)]
    Node(#[from] AgentError),
}

impl From<GraphError> for AgentError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::Node(inner) => inner,
            other => AgentError::Internal(other.to_string()),
        }
    }
}
