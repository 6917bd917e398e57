use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};

use crate::application::ports::{
    CaptureDevice, LanguageDetector, LlmClient, ProviderFault, SpeechRecognizer, TranslationEngine,
};
use crate::application::services::{TranslateError, TranslationOutcome};
use crate::domain::TranslationRequest;
use crate::infrastructure::observability::sanitize_text;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Deserialize)]
pub struct TranslateRequestBody {
    pub text: String,
    pub target_lang: String,
    pub source_lang: Option<String>,
}

#[derive(Serialize)]
pub struct TranslateResponseBody {
    pub original: String,
    pub source_lang: String,
    pub target_lang: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traditional_translation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_translation: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<StageWarning>,
}

#[derive(Serialize)]
pub struct StageWarning {
    pub stage: String,
    pub message: String,
}

#[tracing::instrument(skip(state, body))]
pub async fn translate_handler<D, E, L, A, R>(
    State(state): State<AppState<D, E, L, A, R>>,
    Json(body): Json<TranslateRequestBody>,
) -> impl IntoResponse
where
    D: LanguageDetector + 'static,
    E: TranslationEngine + 'static,
    L: LlmClient + 'static,
    A: CaptureDevice + 'static,
    R: SpeechRecognizer + 'static,
{
    tracing::debug!(
        text = %sanitize_text(&body.text),
        target_lang = %body.target_lang,
        "Processing translation request"
    );

    let request =
        match TranslationRequest::new(body.text, &body.target_lang, body.source_lang.as_deref()) {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Rejected translation request");
                return error_response(StatusCode::BAD_REQUEST, "invalid_request", &e.to_string());
            }
        };

    match state.translation_service.translate(request).await {
        Ok(outcome) => {
            tracing::info!(
                source_lang = %outcome.source_lang,
                target_lang = %outcome.target_lang,
                warnings = outcome.warnings.len(),
                "Translation completed"
            );
            (StatusCode::OK, Json(TranslateResponseBody::from(outcome))).into_response()
        }
        Err(e @ TranslateError::DetectionFailed(_)) => {
            tracing::warn!(error = %e, "Source language detection failed");
            error_response(StatusCode::BAD_REQUEST, "detection_failed", &e.to_string())
        }
        Err(e @ TranslateError::AllProvidersFailed { .. }) => {
            tracing::error!(error = %e, "All translation providers failed");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "translation_failed",
                &e.to_string(),
            )
        }
    }
}

impl From<TranslationOutcome> for TranslateResponseBody {
    fn from(outcome: TranslationOutcome) -> Self {
        Self {
            original: outcome.original,
            source_lang: outcome.source_lang,
            target_lang: outcome.target_lang,
            traditional_translation: outcome.traditional,
            llm_translation: outcome.llm,
            warnings: outcome.warnings.into_iter().map(StageWarning::from).collect(),
        }
    }
}

impl From<ProviderFault> for StageWarning {
    fn from(fault: ProviderFault) -> Self {
        Self {
            stage: fault.stage.as_str().to_string(),
            message: fault.message,
        }
    }
}
