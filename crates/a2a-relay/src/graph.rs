//! A minimal state graph: nodes that transform a state, joined by direct and
//! conditional edges, compiled once and invoked per run.

mod compiled;
mod error;
mod node;
mod state_graph;

pub use compiled::CompiledGraph;
pub use error::GraphError;
pub use node::{FnNode, Node};
pub use state_graph::{Router, StateGraph};

/// Edge target that stops the run
pub const END: &str = "__end__";

/// Node executions allowed per run before it is aborted
pub const DEFAULT_RECURSION_LIMIT: usize = 25;
