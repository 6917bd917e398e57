use std::sync::Arc;

use tokio::net::TcpListener;

use parlance::application::services::{SpeechCaptureService, TranslationService};
use parlance::infrastructure::audio::{CpalCaptureDevice, GoogleSpeechClient};
use parlance::infrastructure::detection::ScriptDetector;
use parlance::infrastructure::llm::OllamaClient;
use parlance::infrastructure::observability::{TracingConfig, init_tracing};
use parlance::infrastructure::translation::MyMemoryClient;
use parlance::presentation::{AppState, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    let detector = Arc::new(ScriptDetector::new());
    let engine = Arc::new(MyMemoryClient::new(
        settings.translation.engine_base_url.clone(),
        settings.translation.provider_timeout,
    ));
    let llm = Arc::new(OllamaClient::new(
        settings.translation.ollama_base_url.clone(),
        settings.translation.ollama_model.clone(),
        settings.translation.provider_timeout,
    ));
    let device = Arc::new(CpalCaptureDevice::new());
    let recognizer = Arc::new(GoogleSpeechClient::new(
        settings.speech.recognizer_base_url.clone(),
        settings.speech.recognizer_api_key.clone(),
        settings.speech.recognizer_language.clone(),
        settings.translation.provider_timeout,
    ));

    let translation_service = Arc::new(TranslationService::new(
        Arc::clone(&detector),
        engine,
        llm,
    ));
    let speech_service = Arc::new(SpeechCaptureService::new(
        device,
        recognizer,
        Arc::clone(&detector),
        settings.speech.capture_spec(),
        settings.speech.fallback_lang.clone(),
    ));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);

    let state = AppState {
        translation_service,
        speech_service,
        settings,
    };

    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
