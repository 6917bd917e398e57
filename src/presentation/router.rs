use axum::Router;
use axum::http::{HeaderValue, Method, header};
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{
    CaptureDevice, LanguageDetector, LlmClient, SpeechRecognizer, TranslationEngine,
};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, speech_to_text_handler, translate_handler};
use crate::presentation::state::AppState;

pub fn create_router<D, E, L, A, R>(state: AppState<D, E, L, A, R>) -> Router
where
    D: LanguageDetector + 'static,
    E: TranslationEngine + 'static,
    L: LlmClient + 'static,
    A: CaptureDevice + 'static,
    R: SpeechRecognizer + 'static,
{
    let cors = cors_layer(&state.settings.cors.allowed_origin);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/translate", post(translate_handler::<D, E, L, A, R>))
        .route(
            "/api/speech-to-text",
            post(speech_to_text_handler::<D, E, L, A, R>),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

fn cors_layer(allowed_origin: &str) -> CorsLayer {
    if allowed_origin == "*" {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    match allowed_origin.parse::<HeaderValue>() {
        Ok(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
            .allow_credentials(true),
        Err(e) => {
            tracing::warn!(
                origin = %allowed_origin,
                error = %e,
                "Invalid CORS origin, allowing any origin without credentials"
            );
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}
