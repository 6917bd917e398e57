use crate::application::ports::{AudioSample, Recognition, RecognitionError, SpeechRecognizer};

/// Fixed-transcript recognizer for tests.
pub struct MockSpeechRecognizer {
    transcript: String,
    confidence: Option<f32>,
}

impl MockSpeechRecognizer {
    pub fn new(transcript: impl Into<String>, confidence: Option<f32>) -> Self {
        Self {
            transcript: transcript.into(),
            confidence,
        }
    }
}

#[async_trait::async_trait]
impl SpeechRecognizer for MockSpeechRecognizer {
    async fn recognize(&self, _sample: &AudioSample) -> Result<Recognition, RecognitionError> {
        Ok(Recognition {
            transcript: self.transcript.clone(),
            confidence: self.confidence,
        })
    }
}
