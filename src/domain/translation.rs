use crate::domain::language::{self, AUTO_SOURCE};

/// A validated translation request as received from a client.
///
/// Immutable once constructed; the source language may still be the `"auto"`
/// sentinel, in which case it must be resolved through detection before any
/// provider sees the request.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationRequest {
    text: String,
    source_lang: String,
    target_lang: String,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRequest {
    #[error("text must not be empty")]
    EmptyText,
    #[error("invalid target language code: {0}")]
    InvalidTargetLang(String),
    #[error("invalid source language code: {0}")]
    InvalidSourceLang(String),
}

impl TranslationRequest {
    pub fn new(
        text: impl Into<String>,
        target_lang: &str,
        source_lang: Option<&str>,
    ) -> Result<Self, InvalidRequest> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InvalidRequest::EmptyText);
        }

        let target_lang = language::normalize(target_lang)
            .ok_or_else(|| InvalidRequest::InvalidTargetLang(target_lang.to_string()))?;

        let source_lang = match source_lang {
            None => AUTO_SOURCE.to_string(),
            Some(s) if s.trim().eq_ignore_ascii_case(AUTO_SOURCE) => AUTO_SOURCE.to_string(),
            Some(s) => language::normalize(s)
                .ok_or_else(|| InvalidRequest::InvalidSourceLang(s.to_string()))?,
        };

        Ok(Self {
            text,
            source_lang,
            target_lang,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn source_lang(&self) -> &str {
        &self.source_lang
    }

    pub fn target_lang(&self) -> &str {
        &self.target_lang
    }

    /// Whether the source language still needs detection.
    pub fn needs_detection(&self) -> bool {
        self.source_lang == AUTO_SOURCE
    }

    /// Finalize with an explicit source language, producing the resolved copy
    /// that providers consume. The original request is left untouched.
    pub fn resolve_with(&self, source_lang: impl Into<String>) -> ResolvedRequest {
        ResolvedRequest {
            text: self.text.clone(),
            source_lang: source_lang.into(),
            target_lang: self.target_lang.clone(),
        }
    }

    /// Finalize without detection; `None` while the source is still `"auto"`.
    pub fn resolve_explicit(&self) -> Option<ResolvedRequest> {
        if self.needs_detection() {
            return None;
        }
        Some(self.resolve_with(self.source_lang.clone()))
    }
}

/// A request whose source language is final. Providers only ever consume this
/// shape, so the `"auto"` sentinel cannot leak downstream.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRequest {
    pub text: String,
    pub source_lang: String,
    pub target_lang: String,
}
