use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{AudioSample, Recognition, RecognitionError, SpeechRecognizer};

/// Google Web Speech adapter (the v2 recognize endpoint).
///
/// An answer with no hypotheses means the service parsed the call but heard
/// nothing intelligible; transport and status failures are infrastructure
/// faults. The two are never merged.
pub struct GoogleSpeechClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
}

impl GoogleSpeechClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            base_url: base_url.into(),
            api_key: api_key.into(),
            language: language.into(),
        }
    }
}

#[derive(Deserialize)]
struct RecognizeLine {
    #[serde(default)]
    result: Vec<RecognizeResult>,
}

#[derive(Deserialize)]
struct RecognizeResult {
    #[serde(default)]
    alternative: Vec<RecognizeAlternative>,
}

#[derive(Deserialize)]
struct RecognizeAlternative {
    transcript: String,
    #[serde(default)]
    confidence: Option<f32>,
}

#[async_trait]
impl SpeechRecognizer for GoogleSpeechClient {
    async fn recognize(&self, sample: &AudioSample) -> Result<Recognition, RecognitionError> {
        let url = format!("{}/speech-api/v2/recognize", self.base_url);

        tracing::debug!(
            bytes = sample.pcm.len(),
            rate = sample.sample_rate,
            "Sending audio for recognition"
        );

        let response = self
            .client
            .post(&url)
            .query(&[
                ("client", "chromium"),
                ("lang", self.language.as_str()),
                ("key", self.api_key.as_str()),
            ])
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("audio/l16; rate={}", sample.sample_rate),
            )
            .body(sample.pcm.clone())
            .send()
            .await
            .map_err(|e| RecognitionError::Service(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(RecognitionError::Service(format!(
                "status {}: {}",
                status, body
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| RecognitionError::Service(format!("body: {}", e)))?;

        // The endpoint answers in JSON lines; the first line carrying
        // hypotheses wins.
        for line in body.lines().filter(|l| !l.trim().is_empty()) {
            let parsed: RecognizeLine = match serde_json::from_str(line) {
                Ok(parsed) => parsed,
                Err(e) => {
                    tracing::warn!(error = %e, "Skipping unparsable recognition line");
                    continue;
                }
            };
            if let Some(alternative) = parsed
                .result
                .into_iter()
                .flat_map(|r| r.alternative)
                .next()
            {
                tracing::info!(chars = alternative.transcript.len(), "Speech recognized");
                return Ok(Recognition {
                    transcript: alternative.transcript,
                    confidence: alternative.confidence,
                });
            }
        }

        Err(RecognitionError::Unintelligible(
            "speech service returned no hypotheses".to_string(),
        ))
    }
}
