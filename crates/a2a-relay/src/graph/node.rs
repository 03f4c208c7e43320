use async_trait::async_trait;

use crate::errors::AgentResult;

/// One step in a graph: state in, updated state out.
#[async_trait]
pub trait Node<S>: Send + Sync {
    async fn run(&self, state: S) -> AgentResult<S>;
}

/// Adapts a synchronous function into a node
pub struct FnNode<F>(pub F);

#[async_trait]
impl<S, F> Node<S> for FnNode<F>
where
    S: Send + 'static,
    F: Fn(S) -> AgentResult<S> + Send + Sync,
{
    async fn run(&self, state: S) -> AgentResult<S> {
        (self.0)(state)
    }
}
