use std::sync::Arc;

use tokio::sync::Mutex;

use crate::application::ports::{
    CaptureDevice, CaptureError, CaptureSpec, LanguageDetector, RecognitionError, SpeechRecognizer,
};
use crate::domain::Transcript;

/// Composes the capture device, speech recognizer, and language detector into
/// one request/response cycle.
///
/// The physical input device is a shared, exclusively-held resource: a single
/// lease guards it system-wide, and a capture arriving while another is in
/// progress fails fast with `DeviceBusy` instead of queueing.
pub struct SpeechCaptureService<A, R, D>
where
    A: CaptureDevice,
    R: SpeechRecognizer,
    D: LanguageDetector,
{
    device: Arc<A>,
    recognizer: Arc<R>,
    detector: Arc<D>,
    spec: CaptureSpec,
    fallback_lang: String,
    device_lease: Mutex<()>,
}

impl<A, R, D> SpeechCaptureService<A, R, D>
where
    A: CaptureDevice,
    R: SpeechRecognizer,
    D: LanguageDetector,
{
    pub fn new(
        device: Arc<A>,
        recognizer: Arc<R>,
        detector: Arc<D>,
        spec: CaptureSpec,
        fallback_lang: impl Into<String>,
    ) -> Self {
        Self {
            device,
            recognizer,
            detector,
            spec,
            fallback_lang: fallback_lang.into(),
            device_lease: Mutex::new(()),
        }
    }

    /// Device check, bounded capture, remote recognition, language tagging.
    /// The lease is dropped on every exit path, success or not.
    pub async fn capture_and_transcribe(&self) -> Result<Transcript, SpeechError> {
        let _lease = self
            .device_lease
            .try_lock()
            .map_err(|_| SpeechError::DeviceBusy)?;

        self.device.probe().await.map_err(SpeechError::from_capture)?;

        tracing::debug!(spec = ?self.spec, "Listening for speech");
        let sample = self
            .device
            .listen(self.spec)
            .await
            .map_err(SpeechError::from_capture)?;
        tracing::debug!(seconds = sample.duration_secs(), "Audio captured");

        let recognition = self
            .recognizer
            .recognize(&sample)
            .await
            .map_err(|e| match e {
                RecognitionError::Unintelligible(message) => {
                    SpeechError::UnintelligibleAudio(message)
                }
                RecognitionError::Service(message) => SpeechError::RecognitionService(message),
            })?;

        // Unlike the translation path, a detection miss here is non-fatal:
        // the transcript is still usable under the configured default tag.
        let lang = match self.detector.detect(&recognition.transcript).await {
            Ok(lang) => lang,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    fallback = %self.fallback_lang,
                    "Transcript language detection failed, using fallback"
                );
                self.fallback_lang.clone()
            }
        };

        tracing::info!(chars = recognition.transcript.len(), lang = %lang, "Speech capture completed");

        Ok(Transcript {
            text: recognition.transcript,
            lang,
            confidence: recognition.confidence,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("no audio input device available: {0}")]
    DeviceUnavailable(String),
    #[error("another capture is already in progress")]
    DeviceBusy,
    #[error("no speech detected before the start timeout")]
    NoSpeechDetected,
    #[error("audio capture failed: {0}")]
    CaptureFailed(String),
    #[error("could not understand audio: {0}")]
    UnintelligibleAudio(String),
    #[error("speech recognition service error: {0}")]
    RecognitionService(String),
}

impl SpeechError {
    fn from_capture(error: CaptureError) -> Self {
        match error {
            CaptureError::DeviceUnavailable(message) => SpeechError::DeviceUnavailable(message),
            CaptureError::NoSpeechDetected => SpeechError::NoSpeechDetected,
            CaptureError::StreamFailed(message) => SpeechError::CaptureFailed(message),
        }
    }
}
