use std::sync::Arc;

use crate::application::ports::{
    LanguageDetector, LlmClient, ProviderFault, ProviderOutcome, ProviderStage, TranslationEngine,
};
use crate::domain::{ResolvedRequest, TranslationRequest};

/// Composes the language detector and both translation providers into one
/// request/response cycle with per-stage failure isolation: the two providers
/// are independent value sources, so the caller still benefits from whichever
/// one is healthy.
pub struct TranslationService<D, E, L>
where
    D: LanguageDetector,
    E: TranslationEngine,
    L: LlmClient,
{
    detector: Arc<D>,
    engine: Arc<E>,
    llm: Arc<L>,
}

impl<D, E, L> TranslationService<D, E, L>
where
    D: LanguageDetector,
    E: TranslationEngine,
    L: LlmClient,
{
    pub fn new(detector: Arc<D>, engine: Arc<E>, llm: Arc<L>) -> Self {
        Self {
            detector,
            engine,
            llm,
        }
    }

    /// Resolve the source language, fan out to both providers, aggregate
    /// whatever survived. Single attempt per stage, no retries.
    pub async fn translate(
        &self,
        request: TranslationRequest,
    ) -> Result<TranslationOutcome, TranslateError> {
        let resolved = self.resolve_source(&request).await?;

        let prompt = llm_prompt(&resolved);
        let (engine_result, llm_result) = tokio::join!(
            self.engine
                .translate(&resolved.text, &resolved.source_lang, &resolved.target_lang),
            self.llm.complete(&prompt),
        );

        let traditional = ProviderOutcome::tag(ProviderStage::TraditionalTranslation, engine_result);
        let llm = ProviderOutcome::tag(ProviderStage::LlmTranslation, llm_result);

        if let (ProviderOutcome::Failure(engine_fault), ProviderOutcome::Failure(llm_fault)) =
            (&traditional, &llm)
        {
            return Err(TranslateError::AllProvidersFailed {
                traditional: engine_fault.message.clone(),
                llm: llm_fault.message.clone(),
            });
        }

        let (traditional, engine_fault) = traditional.into_parts();
        let (llm, llm_fault) = llm.into_parts();
        let warnings: Vec<ProviderFault> =
            [engine_fault, llm_fault].into_iter().flatten().collect();

        for fault in &warnings {
            tracing::warn!(stage = %fault.stage, message = %fault.message, "Translation stage failed");
        }

        Ok(TranslationOutcome {
            original: resolved.text,
            source_lang: resolved.source_lang,
            target_lang: resolved.target_lang,
            traditional,
            llm,
            warnings,
        })
    }

    /// An explicit source language skips detection entirely; `"auto"` goes
    /// through the detector, whose failure is fatal since neither provider
    /// can run without a resolved source.
    async fn resolve_source(
        &self,
        request: &TranslationRequest,
    ) -> Result<ResolvedRequest, TranslateError> {
        if let Some(resolved) = request.resolve_explicit() {
            return Ok(resolved);
        }

        let detected = self
            .detector
            .detect(request.text())
            .await
            .map_err(|e| TranslateError::DetectionFailed(e.to_string()))?;

        tracing::debug!(lang = %detected, "Detected source language");

        Ok(request.resolve_with(detected))
    }
}

fn llm_prompt(request: &ResolvedRequest) -> String {
    format!(
        "Translate this text from {} to {}: {}",
        request.source_lang, request.target_lang, request.text
    )
}

/// Result of one translate cycle. A failed stage leaves its field empty and
/// surfaces as a warning instead of aborting the request.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    pub original: String,
    pub source_lang: String,
    pub target_lang: String,
    pub traditional: Option<String>,
    pub llm: Option<String>,
    pub warnings: Vec<ProviderFault>,
}

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("language detection failed: {0}")]
    DetectionFailed(String),
    #[error("both translation providers failed; traditional: {traditional}; llm: {llm}")]
    AllProvidersFailed { traditional: String, llm: String },
}
