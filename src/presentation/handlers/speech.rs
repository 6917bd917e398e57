use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{
    CaptureDevice, LanguageDetector, LlmClient, SpeechRecognizer, TranslationEngine,
};
use crate::application::services::SpeechError;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Serialize)]
pub struct SpeechResponseBody {
    pub text: String,
    pub lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f32>,
}

#[tracing::instrument(skip(state))]
pub async fn speech_to_text_handler<D, E, L, A, R>(
    State(state): State<AppState<D, E, L, A, R>>,
) -> impl IntoResponse
where
    D: LanguageDetector + 'static,
    E: TranslationEngine + 'static,
    L: LlmClient + 'static,
    A: CaptureDevice + 'static,
    R: SpeechRecognizer + 'static,
{
    match state.speech_service.capture_and_transcribe().await {
        Ok(transcript) => {
            tracing::info!(lang = %transcript.lang, chars = transcript.text.len(), "Speech transcribed");
            (
                StatusCode::OK,
                Json(SpeechResponseBody {
                    text: transcript.text,
                    lang: transcript.lang,
                    confidence: transcript.confidence,
                }),
            )
                .into_response()
        }
        Err(e) => {
            let (status, kind) = classify(&e);
            if status.is_server_error() {
                tracing::error!(error = %e, "Speech capture failed");
            } else {
                tracing::warn!(error = %e, "Speech capture rejected");
            }
            error_response(status, kind, &e.to_string())
        }
    }
}

/// 4xx means the caller can fix it (speak again, retry later); 5xx means the
/// deployment needs attention. Unintelligible audio and a recognizer outage
/// land on opposite sides on purpose.
fn classify(error: &SpeechError) -> (StatusCode, &'static str) {
    match error {
        SpeechError::DeviceUnavailable(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "device_unavailable")
        }
        SpeechError::DeviceBusy => (StatusCode::SERVICE_UNAVAILABLE, "device_busy"),
        SpeechError::NoSpeechDetected => (StatusCode::REQUEST_TIMEOUT, "no_speech_detected"),
        SpeechError::CaptureFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, "capture_failed"),
        SpeechError::UnintelligibleAudio(_) => (StatusCode::BAD_REQUEST, "unintelligible_audio"),
        SpeechError::RecognitionService(_) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "recognition_service_error")
        }
    }
}
