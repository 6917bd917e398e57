use std::time::Duration;

use async_trait::async_trait;

/// Tuning for one capture: ambient calibration window, how long to wait for
/// speech to start, and the cap on a single phrase.
#[derive(Debug, Clone, Copy)]
pub struct CaptureSpec {
    pub calibration: Duration,
    pub start_timeout: Duration,
    pub max_phrase: Duration,
}

impl Default for CaptureSpec {
    fn default() -> Self {
        Self {
            calibration: Duration::from_millis(500),
            start_timeout: Duration::from_secs(5),
            max_phrase: Duration::from_secs(10),
        }
    }
}

/// A bounded audio segment: 16-bit little-endian mono PCM.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSample {
    pub pcm: Vec<u8>,
    pub sample_rate: u32,
}

impl AudioSample {
    pub fn from_mono_f32(samples: &[f32], sample_rate: u32) -> Self {
        let mut pcm = Vec::with_capacity(samples.len() * 2);
        for &sample in samples {
            let quantized = (sample.clamp(-1.0, 1.0) * i16::MAX as f32) as i16;
            pcm.extend_from_slice(&quantized.to_le_bytes());
        }
        Self { pcm, sample_rate }
    }

    pub fn duration_secs(&self) -> f32 {
        self.pcm.len() as f32 / 2.0 / self.sample_rate as f32
    }
}

#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Check that an input device is present without opening a stream.
    async fn probe(&self) -> Result<(), CaptureError>;

    /// Record one bounded segment from the input device.
    async fn listen(&self, spec: CaptureSpec) -> Result<AudioSample, CaptureError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("no audio input device available: {0}")]
    DeviceUnavailable(String),
    #[error("no speech detected before the start timeout")]
    NoSpeechDetected,
    #[error("audio stream failed: {0}")]
    StreamFailed(String),
}
