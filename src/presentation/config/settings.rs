use std::time::Duration;

use crate::application::ports::CaptureSpec;

/// Runtime settings, resolved from the environment with serviceable defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub cors: CorsSettings,
    pub translation: TranslationSettings,
    pub speech: SpeechSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct CorsSettings {
    pub allowed_origin: String,
}

#[derive(Debug, Clone)]
pub struct TranslationSettings {
    pub engine_base_url: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
    pub provider_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct SpeechSettings {
    pub recognizer_base_url: String,
    pub recognizer_api_key: String,
    pub recognizer_language: String,
    pub fallback_lang: String,
    pub calibration: Duration,
    pub start_timeout: Duration,
    pub max_phrase: Duration,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parsed("SERVER_PORT", 8000),
            },
            cors: CorsSettings {
                allowed_origin: env_or("CORS_ALLOWED_ORIGIN", "http://localhost:3000"),
            },
            translation: TranslationSettings {
                engine_base_url: env_or("MYMEMORY_BASE_URL", "https://api.mymemory.translated.net"),
                ollama_base_url: env_or("OLLAMA_BASE_URL", "http://localhost:11434"),
                ollama_model: env_or("OLLAMA_MODEL", "mistral"),
                provider_timeout: Duration::from_secs(env_parsed("PROVIDER_TIMEOUT_SECS", 60)),
            },
            speech: SpeechSettings {
                recognizer_base_url: env_or("SPEECH_API_BASE_URL", "http://www.google.com"),
                recognizer_api_key: env_or("SPEECH_API_KEY", ""),
                recognizer_language: env_or("SPEECH_LANGUAGE", "en-US"),
                fallback_lang: env_or("SPEECH_FALLBACK_LANG", "en"),
                calibration: Duration::from_millis(env_parsed("CAPTURE_CALIBRATION_MS", 500)),
                start_timeout: Duration::from_secs(env_parsed("CAPTURE_START_TIMEOUT_SECS", 5)),
                max_phrase: Duration::from_secs(env_parsed("CAPTURE_MAX_PHRASE_SECS", 10)),
            },
        }
    }
}

impl SpeechSettings {
    pub fn capture_spec(&self) -> CaptureSpec {
        CaptureSpec {
            calibration: self.calibration,
            start_timeout: self.start_timeout,
            max_phrase: self.max_phrase,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
