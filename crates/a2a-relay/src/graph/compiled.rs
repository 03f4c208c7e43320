use std::collections::HashMap;

use tracing::debug;

use super::state_graph::Edge;
use super::{GraphError, Node, END};

/// Immutable graph produced by `StateGraph::compile`
pub struct CompiledGraph<S> {
    pub(super) nodes: HashMap<String, Box<dyn Node<S>>>,
    pub(super) edges: HashMap<String, Edge<S>>,
    pub(super) entry_point: String,
    pub(super) recursion_limit: usize,
}

impl<S> CompiledGraph<S>
where
    S: Send + 'static,
{
    /// Runs from the entry point until an edge reaches `END` or a node has no outgoing edge
    pub async fn invoke(&self, state: S) -> Result<S, GraphError> {
        let mut state = state;
        let mut current = self.entry_point.clone();
        let mut steps = 0;

        loop {
            if steps == self.recursion_limit {
                return Err(GraphError::RecursionLimit(self.recursion_limit));
            }
            steps += 1;

            let node = self
                .nodes
                .get(&current)
                .ok_or_else(|| GraphError::NodeNotFound(current.clone()))?;
            debug!(node = %current, step = steps, "running node");
            state = node.run(state).await?;

            let next = match self.edges.get(&current) {
                None => return Ok(state),
                Some(Edge::Direct(to)) => to.clone(),
                Some(Edge::Conditional { router, mapping }) => {
                    let key = router(&state);
                    mapping
                        .get(&key)
                        .cloned()
                        .ok_or_else(|| GraphError::UnknownRoute {
                            node: current.clone(),
                            key,
                        })?
                }
            };

            if next == END {
                return Ok(state);
            }
            current = next;
        }
    }
}
