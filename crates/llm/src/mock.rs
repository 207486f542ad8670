use async_trait::async_trait;
use querysum_common::{QuerySumError, Result};
use std::sync::Mutex;

use crate::backend::ChatBackend;
use crate::types::ChatMessage;

/// In-memory chat backend for tests
///
/// Returns a canned reply (or a backend failure) and records every
/// conversation it was sent, so tests can assert on the built prompt
/// without a running model server.
#[derive(Debug, Default)]
pub struct MockBackend {
    reply: Option<String>,
    seen: Mutex<Vec<Vec<ChatMessage>>>,
}

impl MockBackend {
    /// Mock that replies with the given text
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Mock whose calls fail as if the backend were unreachable
    pub fn failing() -> Self {
        Self {
            reply: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    /// Conversations sent to this backend so far
    pub fn requests(&self) -> Vec<Vec<ChatMessage>> {
        self.seen.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        self.seen
            .lock()
            .expect("mock lock poisoned")
            .push(messages.to_vec());

        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(QuerySumError::backend("mock backend unavailable")),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
