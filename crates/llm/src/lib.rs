//! QuerySum LLM Integration
//!
//! Chat backend clients, summarization prompt and reply sanitization

mod backend;
mod mock;
mod ollama;
mod openai_compat;
mod prompts;
mod sanitize;
mod summarize;
mod types;

pub use backend::ChatBackend;
pub use mock::MockBackend;
pub use ollama::OllamaClient;
pub use openai_compat::OpenAiCompatClient;
pub use prompts::{summary_messages, summary_prompt, NO_THINK};
pub use sanitize::sanitize_reply;
pub use summarize::Summarizer;
pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, ChatMessage, OllamaChatRequest,
    OllamaChatResponse,
};
