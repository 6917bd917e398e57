use async_trait::async_trait;

#[async_trait]
pub trait LanguageDetector: Send + Sync {
    /// Classify a text sample into an ISO 639 language code.
    async fn detect(&self, text: &str) -> Result<String, DetectionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("language detection failed: {0}")]
    Undetectable(String),
}
