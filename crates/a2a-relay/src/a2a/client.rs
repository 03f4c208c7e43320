use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};
use url::Url;

use super::configs::A2AConfig;
use super::types::{AgentCard, JsonRpcResponse, Message, RemoteResult, SendMessageRequest};
use super::{A2AError, RemoteAgent};

pub const AGENT_CARD_PATH: &str = ".well-known/agent.json";

/// Fetches the agent card published under a base address
pub struct A2ACardResolver<'a> {
    client: &'a Client,
    base_url: Url,
}

impl<'a> A2ACardResolver<'a> {
    pub fn new(client: &'a Client, base_url: &str) -> Result<Self, A2AError> {
        // Url::join drops the last path segment unless the base ends with a slash
        let base_url = Url::parse(&format!("{}/", base_url.trim_end_matches('/')))?;
        Ok(Self { client, base_url })
    }

    pub fn card_url(&self) -> Result<Url, A2AError> {
        Ok(self.base_url.join(AGENT_CARD_PATH)?)
    }

    pub async fn get_agent_card(&self) -> Result<AgentCard, A2AError> {
        let url = self.card_url()?;
        debug!(%url, "resolving agent card");
        let response = self.client.get(url.clone()).send().await?;
        read_json(url.as_str(), response).await
    }
}

/// Sends JSON-RPC requests to the endpoint named by an agent card
pub struct A2AClient<'a> {
    client: &'a Client,
    url: String,
}

impl<'a> A2AClient<'a> {
    pub fn new(client: &'a Client, agent_card: &AgentCard) -> Self {
        Self {
            client,
            url: agent_card.url.clone(),
        }
    }

    pub async fn send_message(
        &self,
        request: &SendMessageRequest,
    ) -> Result<RemoteResult, A2AError> {
        debug!(url = %self.url, request_id = %request.id, "sending message");
        let response = self.client.post(&self.url).json(request).send().await?;
        let reply: JsonRpcResponse = read_json(&self.url, response).await?;

        match (reply.result, reply.error) {
            (_, Some(error)) => Err(A2AError::JsonRpc {
                code: error.code,
                message: error.message,
            }),
            (Some(result), None) => RemoteResult::from_value(result),
            (None, None) => Err(A2AError::EmptyResponse),
        }
    }
}

async fn read_json<T: DeserializeOwned>(
    url: &str,
    response: reqwest::Response,
) -> Result<T, A2AError> {
    let status = response.status();
    if !status.is_success() {
        return Err(A2AError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| A2AError::Decode(e.to_string()))
}

/// Remote agent reached over HTTP. Each query opens its own client, which is
/// dropped when the exchange ends, successful or not.
pub struct A2ARemoteAgent {
    config: A2AConfig,
}

impl A2ARemoteAgent {
    pub fn new(config: A2AConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RemoteAgent for A2ARemoteAgent {
    async fn send_query(&self, query: &str) -> Result<RemoteResult, A2AError> {
        let client = Client::builder().timeout(self.config.timeout).build()?;

        let resolver = A2ACardResolver::new(&client, &self.config.base_url)?;
        let agent_card = resolver.get_agent_card().await?;
        info!("Connected to agent: {}", agent_card.name);

        let a2a_client = A2AClient::new(&client, &agent_card);
        let request = SendMessageRequest::new(Message::user_text(query));
        a2a_client.send_message(&request).await
    }
}
