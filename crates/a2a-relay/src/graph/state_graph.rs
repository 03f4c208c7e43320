use std::collections::HashMap;

use super::compiled::CompiledGraph;
use super::{GraphError, Node, DEFAULT_RECURSION_LIMIT, END};

/// Picks the routing key for the next step from the current state
pub type Router<S> = Box<dyn Fn(&S) -> String + Send + Sync>;

pub(super) enum Edge<S> {
    Direct(String),
    Conditional {
        router: Router<S>,
        mapping: HashMap<String, String>,
    },
}

/// Graph under construction.
///
/// Register nodes with `add_node`, pick where runs start with `set_entry_point`, connect
/// nodes with `add_edge` or `add_conditional_edges`, then `compile`. Edges may target
/// [`END`]. A node with no outgoing edges also ends the run.
pub struct StateGraph<S> {
    nodes: HashMap<String, Box<dyn Node<S>>>,
    edges: Vec<(String, Edge<S>)>,
    entry_point: Option<String>,
    recursion_limit: usize,
}

impl<S> Default for StateGraph<S>
where
    S: Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Send + 'static,
{
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            edges: Vec::new(),
            entry_point: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }

    /// Adds a node; replaces any node already registered under `id`
    pub fn add_node(&mut self, id: impl Into<String>, node: Box<dyn Node<S>>) -> &mut Self {
        self.nodes.insert(id.into(), node);
        self
    }

    pub fn set_entry_point(&mut self, id: impl Into<String>) -> &mut Self {
        self.entry_point = Some(id.into());
        self
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.edges.push((from.into(), Edge::Direct(to.into())));
        self
    }

    /// After `from` runs, call `router` on the state and follow `mapping[key]`
    pub fn add_conditional_edges<F, R, I, K, V>(
        &mut self,
        from: impl Into<String>,
        router: F,
        mapping: I,
    ) -> &mut Self
    where
        F: Fn(&S) -> R + Send + Sync + 'static,
        R: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mapping = mapping
            .into_iter()
            .map(|(key, target)| (key.into(), target.into()))
            .collect();
        self.edges.push((
            from.into(),
            Edge::Conditional {
                router: Box::new(move |state| router(state).into()),
                mapping,
            },
        ));
        self
    }

    pub fn with_recursion_limit(&mut self, limit: usize) -> &mut Self {
        self.recursion_limit = limit;
        self
    }

    fn check_target(&self, target: &str) -> Result<(), GraphError> {
        if target == END || self.nodes.contains_key(target) {
            Ok(())
        } else {
            Err(GraphError::NodeNotFound(target.to_string()))
        }
    }

    /// Validates the wiring and freezes the graph
    pub fn compile(self) -> Result<CompiledGraph<S>, GraphError> {
        let entry_point = self
            .entry_point
            .clone()
            .ok_or(GraphError::MissingEntryPoint)?;
        if !self.nodes.contains_key(&entry_point) {
            return Err(GraphError::NodeNotFound(entry_point));
        }

        let mut edges = HashMap::new();
        for (from, edge) in &self.edges {
            if !self.nodes.contains_key(from) {
                return Err(GraphError::NodeNotFound(from.clone()));
            }
            match edge {
                Edge::Direct(to) => self.check_target(to)?,
                Edge::Conditional { mapping, .. } => {
                    for target in mapping.values() {
                        self.check_target(target)?;
                    }
                }
            }
        }

        for (from, edge) in self.edges {
            if edges.insert(from.clone(), edge).is_some() {
                return Err(GraphError::DuplicateEdges(from));
            }
        }

        Ok(CompiledGraph {
            nodes: self.nodes,
            edges,
            entry_point,
            recursion_limit: self.recursion_limit,
        })
    }
}
