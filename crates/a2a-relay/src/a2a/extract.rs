//! Turns a remote result into the single text shown to the user.
//!
//! The remote agent is free to answer with artifacts, with messages, or with a status
//! update. Sources are probed from the most final to the least final:
//!
//! 1. artifacts, in order, parts in order
//! 2. messages, newest first, parts in order
//! 3. the status message, parts in order
//! 4. agent entries of a task history, newest first
//!
//! A task history also holds the user's own query, so only agent entries count there.
//!
//! The first non-empty text part wins. When nothing matches, the raw result goes to a
//! [`DiagnosticSink`] and a fixed notice is returned instead.

use serde_json::Value;
use tracing::info;

use super::types::{MessageRole, Part, RemoteResult};

pub const NO_CONTENT_NOTICE: &str = "Received response from A2A agent but couldn't extract content. Check logs for response structure.";

/// Receives results that carried no extractable text
pub trait DiagnosticSink: Send + Sync {
    fn response_structure(&self, raw: &Value);
}

/// Logs the result structure at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn response_structure(&self, raw: &Value) {
        info!("Response structure: {}", raw);
    }
}

fn first_text<'a, I>(parts: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a Part>,
{
    parts
        .into_iter()
        .filter_map(Part::as_text)
        .find(|text| !text.is_empty())
}

/// Returns the first text found, without falling back to the notice
pub fn find_text(result: &RemoteResult) -> Option<&str> {
    if let Some(artifacts) = result.artifacts.as_deref() {
        if let Some(text) = artifacts
            .iter()
            .find_map(|artifact| first_text(&artifact.parts))
        {
            return Some(text);
        }
    }

    if let Some(messages) = result.messages.as_deref() {
        if let Some(text) = messages
            .iter()
            .rev()
            .find_map(|message| first_text(&message.parts))
        {
            return Some(text);
        }
    }

    if let Some(text) = result
        .status
        .as_ref()
        .and_then(|status| status.message.as_ref())
        .and_then(|message| first_text(&message.parts))
    {
        return Some(text);
    }

    result.history.as_deref().and_then(|history| {
        history
            .iter()
            .rev()
            .filter(|message| message.role == MessageRole::Agent)
            .find_map(|message| first_text(&message.parts))
    })
}

pub fn extract(result: &RemoteResult, sink: &dyn DiagnosticSink) -> String {
    match find_text(result) {
        Some(text) => text.to_string(),
        None => {
            sink.response_structure(&result.raw);
            NO_CONTENT_NOTICE.to_string()
        }
    }
}
