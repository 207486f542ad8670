use async_trait::async_trait;
use querysum_common::{QuerySumError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::backend::ChatBackend;
use crate::types::{ChatMessage, OllamaChatRequest, OllamaChatResponse};

/// Ollama chat API client
///
/// Talks to a remote Ollama server (typically reached over a tunnel)
/// through the native `/api/chat` protocol. One blocking call per
/// request, bounded by the configured timeout; failures are not retried.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        info!("Ollama client initialized: {} (model: {})", base_url, model);
        Ok(Self {
            base_url,
            model,
            client,
        })
    }
}

#[async_trait]
impl ChatBackend for OllamaClient {
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let url = format!("{}/api/chat", self.base_url);

        let request = OllamaChatRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            stream: Some(false),
        };

        debug!(
            "Sending chat request to Ollama - Model: {}, Messages: {}",
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| QuerySumError::backend(format!("Failed to send request: {}", e)))?
            .error_for_status()
            .map_err(|e| QuerySumError::backend(format!("Ollama API error: {}", e)))?;

        let result: OllamaChatResponse = response
            .json()
            .await
            .map_err(|e| QuerySumError::llm(format!("Failed to parse Ollama reply: {}", e)))?;

        debug!(
            "Received reply from Ollama - Length: {}, Done: {}",
            result.message.content.len(),
            result.done
        );

        if result.message.content.is_empty() {
            return Err(QuerySumError::llm("Empty reply from Ollama"));
        }

        Ok(result.message.content)
    }

    fn name(&self) -> &'static str {
        "ollama"
    }
}
