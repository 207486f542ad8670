use async_trait::async_trait;
use querysum_common::{QuerySumError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::backend::ChatBackend;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// OpenAI-compatible chat client
///
/// Local model runtimes (llama.cpp server, LM Studio, local Ollama)
/// expose an OpenAI-compatible `/v1/chat/completions` surface; this
/// client drives one through it. Interchangeable with [`OllamaClient`]
/// behind the [`ChatBackend`] trait.
#[derive(Debug, Clone)]
pub struct OpenAiCompatClient {
    base_url: String,
    model: String,
    api_key: Option<String>,
    client: Client,
}

impl OpenAiCompatClient {
    /// Create new OpenAI-compatible client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!(
            "OpenAI-compatible client initialized: {} (model: {})",
            base_url, model
        );
        Ok(Self {
            base_url,
            model,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl ChatBackend for OpenAiCompatClient {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: false,
        };

        debug!(
            "Sending chat completion request - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let mut builder = self.client.post(&url).json(&request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| QuerySumError::backend(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| QuerySumError::backend(format!("Chat completion API error: {}", e)))?;

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| QuerySumError::llm(format!("Failed to parse chat completion: {}", e)))?;

        let choice = result
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| QuerySumError::llm("No choices in chat completion reply"))?;

        debug!(
            "Received chat completion - Length: {}, Finish reason: {:?}",
            choice.message.content.len(),
            choice.finish_reason
        );

        if choice.message.content.is_empty() {
            return Err(QuerySumError::llm("Empty reply from chat completion"));
        }

        Ok(choice.message.content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}
