use crate::application::ports::{DetectionError, LanguageDetector};

/// Fixed-answer detector for tests.
pub struct MockLanguageDetector {
    lang: String,
}

impl MockLanguageDetector {
    pub fn new(lang: impl Into<String>) -> Self {
        Self { lang: lang.into() }
    }
}

#[async_trait::async_trait]
impl LanguageDetector for MockLanguageDetector {
    async fn detect(&self, _text: &str) -> Result<String, DetectionError> {
        Ok(self.lang.clone())
    }
}
