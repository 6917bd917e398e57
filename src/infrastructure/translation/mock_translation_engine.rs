use crate::application::ports::{TranslationEngine, TranslationEngineError};

/// Canned-reply engine for tests.
pub struct MockTranslationEngine {
    reply: String,
}

impl MockTranslationEngine {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait::async_trait]
impl TranslationEngine for MockTranslationEngine {
    async fn translate(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, TranslationEngineError> {
        Ok(self.reply.clone())
    }
}
