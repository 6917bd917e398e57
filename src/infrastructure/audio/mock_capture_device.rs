use crate::application::ports::{AudioSample, CaptureDevice, CaptureError, CaptureSpec};

/// Canned-sample device for tests.
pub struct MockCaptureDevice {
    sample: AudioSample,
}

impl MockCaptureDevice {
    pub fn new(sample: AudioSample) -> Self {
        Self { sample }
    }
}

impl Default for MockCaptureDevice {
    /// Half a second of 16 kHz silence.
    fn default() -> Self {
        Self::new(AudioSample::from_mono_f32(&[0.0; 8000], 16_000))
    }
}

#[async_trait::async_trait]
impl CaptureDevice for MockCaptureDevice {
    async fn probe(&self) -> Result<(), CaptureError> {
        Ok(())
    }

    async fn listen(&self, _spec: CaptureSpec) -> Result<AudioSample, CaptureError> {
        Ok(self.sample.clone())
    }
}
