use async_trait::async_trait;

use super::capture_device::AudioSample;

/// A recognition hypothesis for one audio segment.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    pub transcript: String,
    pub confidence: Option<f32>,
}

#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    async fn recognize(&self, sample: &AudioSample) -> Result<Recognition, RecognitionError>;
}

/// The two failure classes stay distinct end to end: a caller fixes
/// `Unintelligible` by speaking again, `Service` by checking the deployment.
#[derive(Debug, thiserror::Error)]
pub enum RecognitionError {
    #[error("could not understand audio: {0}")]
    Unintelligible(String),
    #[error("recognition service error: {0}")]
    Service(String),
}
