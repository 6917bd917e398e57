mod capture_device;
mod language_detector;
mod llm_client;
mod provider_outcome;
mod speech_recognizer;
mod translation_engine;

pub use capture_device::{AudioSample, CaptureDevice, CaptureError, CaptureSpec};
pub use language_detector::{DetectionError, LanguageDetector};
pub use llm_client::{LlmClient, LlmClientError};
pub use provider_outcome::{ProviderFault, ProviderOutcome, ProviderStage};
pub use speech_recognizer::{Recognition, RecognitionError, SpeechRecognizer};
pub use translation_engine::{TranslationEngine, TranslationEngineError};
