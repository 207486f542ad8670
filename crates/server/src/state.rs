use querysum_common::{AppConfig, Result};
use querysum_llm::Summarizer;

/// Shared application state
///
/// Constructed once at startup; requests only read from it. The core is
/// stateless per request, so no locking is needed.
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Summarizer over the configured chat backend
    pub summarizer: Summarizer,
}

impl AppState {
    /// Create new application state from configuration
    pub fn new(config: AppConfig) -> Result<Self> {
        let summarizer = Summarizer::from_config(&config)?;

        Ok(Self { config, summarizer })
    }

    /// State with an explicit summarizer (used by tests to substitute a
    /// fake backend)
    pub fn with_summarizer(config: AppConfig, summarizer: Summarizer) -> Self {
        Self { config, summarizer }
    }
}
