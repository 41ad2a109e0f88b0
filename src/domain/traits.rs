use crate::domain::error::AnuvadError;
use crate::domain::model::TranslationRequest;
use async_trait::async_trait;

/// Trait for remote translation providers.
///
/// The production implementation talks to an LLM-backed endpoint; tests
/// inject counting mocks through `AppState::with_translator`.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a single request. Implementations may fail; the caller
    /// is responsible for degrading to the source text.
    async fn translate(&self, request: &TranslationRequest) -> Result<String, AnuvadError>;

    /// Tag stored in the cache's `provider` column for rows this
    /// translator produced.
    fn provider_tag(&self) -> &str;
}
