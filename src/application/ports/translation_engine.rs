use async_trait::async_trait;

/// Deterministic dictionary/rule-based translation between two explicit
/// language codes.
#[async_trait]
pub trait TranslationEngine: Send + Sync {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TranslationEngineError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
