use config::{Config, Environment};
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::a2a::configs::{A2AConfig, A2A_BASE_URL, A2A_TIMEOUT_SECS};

const ENV_PREFIX: &str = "A2A_RELAY";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Other(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct AgentSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub agent: AgentSettings,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_and_validate()
    }

    fn load_and_validate() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("agent.base_url", default_base_url())?
            .set_default("agent.timeout_secs", default_timeout_secs())?
            // Layer on the environment variables
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize().map_err(|err| {
            tracing::debug!("Configuration error: {:?}", &err);
            ConfigError::Other(err)
        })
    }

    /// Client configuration for the remote agent
    pub fn into_config(self) -> A2AConfig {
        A2AConfig::new(
            self.agent.base_url,
            Duration::from_secs(self.agent.timeout_secs),
        )
    }
}

fn default_base_url() -> String {
    A2A_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    A2A_TIMEOUT_SECS
}
