use std::fmt;

/// External pipeline stages, for diagnostics attached to partial results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderStage {
    LanguageDetection,
    TraditionalTranslation,
    LlmTranslation,
    AudioCapture,
    SpeechRecognition,
}

impl ProviderStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderStage::LanguageDetection => "language_detection",
            ProviderStage::TraditionalTranslation => "traditional_translation",
            ProviderStage::LlmTranslation => "llm_translation",
            ProviderStage::AudioCapture => "audio_capture",
            ProviderStage::SpeechRecognition => "speech_recognition",
        }
    }
}

impl fmt::Display for ProviderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A failed provider call, tagged with its stage and the underlying message.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderFault {
    pub stage: ProviderStage,
    pub message: String,
}

/// Tagged result of one provider call. Nothing leaves an orchestrator as a
/// raw provider error; every external call ends up as a value or a
/// `ProviderFault` the caller has to handle by kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderOutcome<T> {
    Success(T),
    Failure(ProviderFault),
}

impl<T> ProviderOutcome<T> {
    pub fn tag<E: fmt::Display>(stage: ProviderStage, result: Result<T, E>) -> Self {
        match result {
            Ok(value) => ProviderOutcome::Success(value),
            Err(e) => ProviderOutcome::Failure(ProviderFault {
                stage,
                message: e.to_string(),
            }),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProviderOutcome::Success(_))
    }

    /// Split into the success value and the fault; exactly one side is set.
    pub fn into_parts(self) -> (Option<T>, Option<ProviderFault>) {
        match self {
            ProviderOutcome::Success(value) => (Some(value), None),
            ProviderOutcome::Failure(fault) => (None, Some(fault)),
        }
    }
}
