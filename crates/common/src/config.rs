use crate::error::QuerySumError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Which chat backend serves summarization requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// Remote Ollama server (native /api/chat protocol)
    Ollama,
    /// Local model runtime behind an OpenAI-compatible surface
    OpenAi,
}

impl BackendKind {
    /// Parse backend kind from a config string
    pub fn parse(s: &str) -> Result<Self, QuerySumError> {
        match s.to_lowercase().as_str() {
            "ollama" => Ok(Self::Ollama),
            "openai" | "openai-compat" | "local" => Ok(Self::OpenAi),
            other => Err(QuerySumError::config(format!(
                "Unknown backend kind '{}' (expected 'ollama' or 'openai')",
                other
            ))),
        }
    }

    /// Human-readable backend name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ollama => "ollama",
            Self::OpenAi => "openai",
        }
    }
}

/// QuerySum application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Selected chat backend
    pub backend: BackendKind,

    /// Ollama API base URL (remote server, typically reached over a tunnel)
    pub ollama_base_url: String,

    /// OpenAI-compatible base URL (local runtime: llama.cpp server, LM Studio, local Ollama)
    pub openai_base_url: String,

    /// Optional bearer key for the OpenAI-compatible surface
    pub openai_api_key: Option<String>,

    /// Summarization model name
    pub model: String,

    /// Backend request timeout in seconds
    pub request_timeout_secs: u64,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendKind::Ollama,
            ollama_base_url: "http://localhost:11434".to_string(),
            openai_base_url: "http://localhost:8080".to_string(),
            openai_api_key: None,
            model: "qwen3:8b".to_string(),
            request_timeout_secs: 60,
            server_host: "0.0.0.0".to_string(),
            server_port: 8000,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, QuerySumError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let backend = match std::env::var("LLM_BACKEND") {
            Ok(s) => BackendKind::parse(&s)?,
            Err(_) => BackendKind::Ollama,
        };

        let config = Self {
            backend,
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            openai_api_key: std::env::var("OPENAI_API_KEY").ok(),
            model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| "qwen3:8b".to_string()),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8000),
            log_dir: std::env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Base URL of the selected backend
    pub fn backend_base_url(&self) -> &str {
        match self.backend {
            BackendKind::Ollama => &self.ollama_base_url,
            BackendKind::OpenAi => &self.openai_base_url,
        }
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), QuerySumError> {
        if self.model.is_empty() {
            return Err(QuerySumError::config("Model name cannot be empty"));
        }

        for url in [&self.ollama_base_url, &self.openai_base_url] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(QuerySumError::config(format!(
                    "Backend base URL '{}' must start with http:// or https://",
                    url
                )));
            }
        }

        if self.request_timeout_secs == 0 {
            return Err(QuerySumError::config("Request timeout cannot be 0"));
        }

        if self.server_port == 0 {
            return Err(QuerySumError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 8000);
        assert_eq!(config.backend, BackendKind::Ollama);
        assert_eq!(config.model, "qwen3:8b");
        assert_eq!(config.request_timeout_secs, 60);
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:8000");
    }

    #[test]
    fn test_parse_backend_kind() {
        assert_eq!(BackendKind::parse("ollama").unwrap(), BackendKind::Ollama);
        assert_eq!(BackendKind::parse("OpenAI").unwrap(), BackendKind::OpenAi);
        assert_eq!(BackendKind::parse("local").unwrap(), BackendKind::OpenAi);
        assert!(BackendKind::parse("vllm").is_err());
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.model = String::new();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.ollama_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.request_timeout_secs = 0;
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_backend_base_url() {
        let mut config = AppConfig::default();
        assert_eq!(config.backend_base_url(), "http://localhost:11434");
        config.backend = BackendKind::OpenAi;
        assert_eq!(config.backend_base_url(), "http://localhost:8080");
    }
}
