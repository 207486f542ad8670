use serde::{Deserialize, Serialize};

/// Summarization request
#[derive(Debug, Deserialize)]
pub struct QueryRequest {
    /// Raw prompt text to summarize (arbitrary text, not validated)
    pub prompt: String,
}

/// Summarization response
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Sanitized summary text
    pub response: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error summary
    pub error: String,

    /// Error details
    pub details: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Configured backend name
    pub backend: String,

    /// Configured model name
    pub model: String,
}
