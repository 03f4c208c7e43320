use std::time::Duration;

pub const A2A_BASE_URL: &str = "http://localhost:10000";
pub const A2A_TIMEOUT_SECS: u64 = 60;

/// Where the remote agent lives and how long a single exchange may take
#[derive(Debug, Clone, PartialEq)]
pub struct A2AConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl A2AConfig {
    pub fn new<S: Into<String>>(base_url: S, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }
}

impl Default for A2AConfig {
    fn default() -> Self {
        Self::new(A2A_BASE_URL, Duration::from_secs(A2A_TIMEOUT_SECS))
    }
}
