//! These models represent the objects passed around by the relay agent
//!
//! There are two related formats we need to interact with:
//! - the conversation held by the decision graph: user input, assistant decisions
//!   carrying tool requests, and tool responses
//! - A2A protocol messages, sent to and received from the remote agent (see `crate::a2a`)
//!
//! The conversation models below are internal. The A2A wire types live with the client
//! and are converted to text by the response extractor before they reach the conversation.
pub mod content;
pub mod message;
pub mod role;
pub mod tool;
