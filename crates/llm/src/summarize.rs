use querysum_common::{AppConfig, BackendKind, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::backend::ChatBackend;
use crate::ollama::OllamaClient;
use crate::openai_compat::OpenAiCompatClient;
use crate::prompts::summary_messages;
use crate::sanitize::sanitize_reply;

/// Summarizer over a chat backend
///
/// Stateless request pipeline: build the prompt, make one backend call,
/// sanitize the reply. No retry, no caching, no cross-request state.
#[derive(Clone)]
pub struct Summarizer {
    backend: Arc<dyn ChatBackend>,
}

impl Summarizer {
    /// Create new summarizer over an explicit backend
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self { backend }
    }

    /// Construct the configured backend client and wrap it
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let timeout = Duration::from_secs(config.request_timeout_secs);

        let backend: Arc<dyn ChatBackend> = match config.backend {
            BackendKind::Ollama => Arc::new(OllamaClient::new(
                &config.ollama_base_url,
                &config.model,
                timeout,
            )?),
            BackendKind::OpenAi => Arc::new(OpenAiCompatClient::new(
                &config.openai_base_url,
                &config.model,
                config.openai_api_key.clone(),
                timeout,
            )?),
        };

        Ok(Self::new(backend))
    }

    /// Name of the underlying backend
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Summarize the given prompt text
    pub async fn summarize(&self, prompt: &str) -> Result<String> {
        debug!("Summarization request - Prompt length: {} chars", prompt.len());

        let messages = summary_messages(prompt);
        let raw = self.backend.chat(&messages).await?;
        let clean = sanitize_reply(&raw);

        debug!(
            "Reply sanitized - Raw: {} chars, Clean: {} chars",
            raw.len(),
            clean.len()
        );

        Ok(clean)
    }
}
