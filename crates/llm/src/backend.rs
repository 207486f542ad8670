use crate::types::ChatMessage;
use async_trait::async_trait;
use querysum_common::Result;

/// Common trait for chat backends
///
/// One synchronous call: given an ordered list of role/content messages,
/// return the generated reply text. The model identifier and timeout are
/// fixed at client construction.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Generate reply text for a conversation
    async fn chat(&self, messages: &[ChatMessage]) -> Result<String>;

    /// Backend name for logging and health reporting
    fn name(&self) -> &'static str;
}
