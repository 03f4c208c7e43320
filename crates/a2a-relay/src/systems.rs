mod a2a_system;
mod system;

pub use a2a_system::{A2ASystem, A2A_ERROR_PREFIX, QUERY_A2A_AGENT};
pub use system::System;
