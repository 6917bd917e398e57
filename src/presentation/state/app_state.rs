use std::sync::Arc;

use crate::application::ports::{
    CaptureDevice, LanguageDetector, LlmClient, SpeechRecognizer, TranslationEngine,
};
use crate::application::services::{SpeechCaptureService, TranslationService};
use crate::presentation::config::Settings;

pub struct AppState<D, E, L, A, R>
where
    D: LanguageDetector,
    E: TranslationEngine,
    L: LlmClient,
    A: CaptureDevice,
    R: SpeechRecognizer,
{
    pub translation_service: Arc<TranslationService<D, E, L>>,
    pub speech_service: Arc<SpeechCaptureService<A, R, D>>,
    pub settings: Settings,
}

impl<D, E, L, A, R> Clone for AppState<D, E, L, A, R>
where
    D: LanguageDetector,
    E: TranslationEngine,
    L: LlmClient,
    A: CaptureDevice,
    R: SpeechRecognizer,
{
    fn clone(&self) -> Self {
        Self {
            translation_service: Arc::clone(&self.translation_service),
            speech_service: Arc::clone(&self.speech_service),
            settings: self.settings.clone(),
        }
    }
}
