use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{TranslationEngine, TranslationEngineError};

/// MyMemory REST adapter, the deterministic dictionary-backed engine.
pub struct MyMemoryClient {
    client: reqwest::Client,
    base_url: String,
}

impl MyMemoryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
        }
    }
}

#[derive(Deserialize)]
struct MyMemoryResponse {
    #[serde(rename = "responseData")]
    response_data: MyMemoryData,
    // Number on success, string on some error answers.
    #[serde(rename = "responseStatus")]
    response_status: serde_json::Value,
    #[serde(rename = "responseDetails", default)]
    response_details: Option<serde_json::Value>,
}

#[derive(Deserialize)]
struct MyMemoryData {
    #[serde(rename = "translatedText", default)]
    translated_text: Option<String>,
}

#[async_trait]
impl TranslationEngine for MyMemoryClient {
    async fn translate(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationEngineError> {
        let url = format!("{}/get", self.base_url);
        let langpair = format!("{}|{}", source_lang, target_lang);

        tracing::debug!(langpair = %langpair, "Requesting dictionary translation");

        let response = self
            .client
            .get(&url)
            .query(&[("q", text), ("langpair", &langpair)])
            .send()
            .await
            .map_err(|e| TranslationEngineError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(TranslationEngineError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let parsed: MyMemoryResponse = response
            .json()
            .await
            .map_err(|e| TranslationEngineError::InvalidResponse(format!("body: {}", e)))?;

        let status_code = parsed
            .response_status
            .as_i64()
            .or_else(|| parsed.response_status.as_str().and_then(|s| s.parse().ok()));
        if status_code != Some(200) {
            let details = parsed
                .response_details
                .as_ref()
                .and_then(|d| d.as_str())
                .unwrap_or("no details")
                .to_string();
            return Err(TranslationEngineError::ApiRequestFailed(format!(
                "engine status {}: {}",
                parsed.response_status, details
            )));
        }

        let translated = parsed
            .response_data
            .translated_text
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                TranslationEngineError::InvalidResponse("empty translation".to_string())
            })?;

        tracing::debug!(chars = translated.len(), "Dictionary translation received");

        Ok(translated)
    }
}
