use serde::{Deserialize, Serialize};

/// Single role/content chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role ("user", "assistant", "system")
    pub role: String,

    /// Message content
    pub content: String,
}

impl ChatMessage {
    /// Create a user-role message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Ollama chat request
#[derive(Debug, Clone, Serialize)]
pub struct OllamaChatRequest {
    /// Model name (e.g., "qwen3:8b")
    pub model: String,

    /// Ordered conversation messages
    pub messages: Vec<ChatMessage>,

    /// Disable streaming
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

/// Ollama chat response
#[derive(Debug, Clone, Deserialize)]
pub struct OllamaChatResponse {
    /// Generated assistant message
    pub message: ChatMessage,

    /// Whether generation is complete
    #[serde(default)]
    pub done: bool,
}

/// Chat completion request (OpenAI-compatible)
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model name
    pub model: String,

    /// Ordered conversation messages
    pub messages: Vec<ChatMessage>,

    /// Disable streaming
    pub stream: bool,
}

/// Chat completion response (OpenAI-compatible, non-streaming)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated choices; the first one carries the reply
    pub choices: Vec<ChatChoice>,
}

/// Single chat completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// Generated assistant message
    pub message: ChatMessage,

    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}
