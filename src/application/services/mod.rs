mod speech_service;
mod translation_service;

pub use speech_service::{SpeechCaptureService, SpeechError};
pub use translation_service::{TranslateError, TranslationOutcome, TranslationService};
