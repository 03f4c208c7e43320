use async_trait::async_trait;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{AgentError, AgentResult};
use crate::graph::{CompiledGraph, FnNode, GraphError, Node, StateGraph, END};
use crate::models::content::Content;
use crate::models::message::{Message, ToolRequest};
use crate::models::role::Role;
use crate::models::tool::ToolCall;
use crate::systems::{System, QUERY_A2A_AGENT};

pub const AGENT_NODE: &str = "agent";
pub const ACTION_NODE: &str = "action";

const QUERY_NOTICE: &str = "I'll query the A2A agent for you.";
const ASK_FOR_INPUT: &str = "I can help you query the A2A agent. What would you like to know?";

/// Conversation carried through one run of the graph
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgentState {
    pub messages: Vec<Message>,
    /// Text of the most recent remote agent answer in this run
    pub last_a2a_response: String,
}

impl AgentState {
    pub fn from_user_text<S: Into<String>>(text: S) -> Self {
        Self {
            messages: vec![Message::user().with_text(text)],
            last_a2a_response: String::new(),
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

/// Decide what the assistant does next.
///
/// A user message becomes a `query_a2a_agent` request for that text; anything else gets a
/// prompt asking for input. Exactly one message is appended.
pub fn call_model(mut state: AgentState) -> AgentResult<AgentState> {
    let last = state
        .last_message()
        .ok_or(AgentError::EmptyConversation)?;

    let response = if last.role == Role::User {
        let query = last.text();
        Message::assistant().with_text(QUERY_NOTICE).with_tool_request(
            Uuid::new_v4().to_string(),
            Ok(ToolCall::new(QUERY_A2A_AGENT, json!({ "query": query }))),
        )
    } else {
        Message::assistant().with_text(ASK_FOR_INPUT)
    };

    state.push(response);
    Ok(state)
}

/// Route to the action node when the latest message carries tool requests
pub fn should_continue(state: &AgentState) -> &'static str {
    match state.last_message() {
        Some(message) if message.has_tool_requests() => ACTION_NODE,
        _ => "end",
    }
}

/// Executes the pending tool requests of the latest message
pub struct ActionNode {
    systems: Vec<Box<dyn System>>,
}

impl ActionNode {
    pub fn new(systems: Vec<Box<dyn System>>) -> Self {
        Self { systems }
    }

    fn get_system_for_tool(&self, tool_name: &str) -> Option<&dyn System> {
        self.systems
            .iter()
            .find(|system| system.tools().iter().any(|tool| tool.name == tool_name))
            .map(|v| &**v)
    }

    /// Dispatch a single tool call to the system that provides it
    async fn dispatch_tool_call(&self, request: &ToolRequest) -> AgentResult<Vec<Content>> {
        let call = request.tool_call.clone()?;
        let system = self
            .get_system_for_tool(&call.name)
            .ok_or_else(|| AgentError::ToolNotFound(call.name.clone()))?;

        debug!(tool = %call.name, id = %request.id, system = system.name(), "dispatching tool call");
        system.call(call).await
    }
}

#[async_trait]
impl Node<AgentState> for ActionNode {
    async fn run(&self, mut state: AgentState) -> AgentResult<AgentState> {
        let requests: Vec<ToolRequest> = state
            .last_message()
            .map(|message| message.tool_requests().into_iter().cloned().collect())
            .unwrap_or_default();

        for request in requests {
            let output = self.dispatch_tool_call(&request).await;
            let response = Message::tool().with_tool_response(request.id.clone(), output);
            state.last_a2a_response = response.text();
            state.push(response);
        }

        Ok(state)
    }
}

/// Wire `agent -> (action | END)` and `action -> END`
pub fn build_agent_graph(
    systems: Vec<Box<dyn System>>,
) -> Result<CompiledGraph<AgentState>, GraphError> {
    let mut graph: StateGraph<AgentState> = StateGraph::new();
    graph
        .add_node(AGENT_NODE, Box::new(FnNode(call_model)))
        .add_node(ACTION_NODE, Box::new(ActionNode::new(systems)))
        .set_entry_point(AGENT_NODE)
        .add_conditional_edges(
            AGENT_NODE,
            should_continue,
            [(ACTION_NODE, ACTION_NODE), ("end", END)],
        )
        .add_edge(ACTION_NODE, END);
    graph.compile()
}

/// Runs one user query through the agent graph
pub struct Relay {
    graph: CompiledGraph<AgentState>,
}

impl Relay {
    pub fn new(graph: CompiledGraph<AgentState>) -> Self {
        Self { graph }
    }

    pub fn from_systems(systems: Vec<Box<dyn System>>) -> Result<Self, GraphError> {
        Ok(Self::new(build_agent_graph(systems)?))
    }

    /// Run a fresh conversation seeded with `query` and return its final state
    pub async fn run(&self, query: &str) -> AgentResult<AgentState> {
        Ok(self.graph.invoke(AgentState::from_user_text(query)).await?)
    }

    /// Run a fresh conversation and return its last message
    pub async fn ask(&self, query: &str) -> AgentResult<Option<Message>> {
        let mut state = self.run(query).await?;
        Ok(state.messages.pop())
    }
}
