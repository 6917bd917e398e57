use std::sync::mpsc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};

use crate::application::ports::{AudioSample, CaptureDevice, CaptureError, CaptureSpec};

const FRAME_MS: u64 = 100;
/// Audio kept from just before speech onset so the first syllable survives.
const PREROLL_MS: u64 = 250;
/// Trailing silence that ends a phrase.
const TRAILING_SILENCE_MS: u64 = 800;
/// Ambient RMS is scaled by this factor to get the speech threshold.
const NOISE_MARGIN: f32 = 4.0;
/// Threshold floor for very quiet rooms.
const MIN_THRESHOLD: f32 = 0.01;

/// Microphone adapter over the host's default input device.
///
/// `listen` runs on the blocking pool: cpal's stream callbacks feed a channel
/// that the capture loop drains in ~100 ms frames, so a capture in progress
/// never stalls the async runtime.
pub struct CpalCaptureDevice;

impl CpalCaptureDevice {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CpalCaptureDevice {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureDevice for CpalCaptureDevice {
    async fn probe(&self) -> Result<(), CaptureError> {
        tokio::task::spawn_blocking(|| {
            cpal::default_host()
                .default_input_device()
                .map(|_| ())
                .ok_or_else(|| {
                    CaptureError::DeviceUnavailable("no default input device".to_string())
                })
        })
        .await
        .map_err(|e| CaptureError::StreamFailed(format!("capture task: {}", e)))?
    }

    async fn listen(&self, spec: CaptureSpec) -> Result<AudioSample, CaptureError> {
        tokio::task::spawn_blocking(move || capture_blocking(spec))
            .await
            .map_err(|e| CaptureError::StreamFailed(format!("capture task: {}", e)))?
    }
}

fn capture_blocking(spec: CaptureSpec) -> Result<AudioSample, CaptureError> {
    let host = cpal::default_host();
    let device = host
        .default_input_device()
        .ok_or_else(|| CaptureError::DeviceUnavailable("no default input device".to_string()))?;
    let supported = device
        .default_input_config()
        .map_err(|e| CaptureError::DeviceUnavailable(format!("input config: {}", e)))?;

    let sample_rate = supported.sample_rate().0;
    let channels = supported.channels() as usize;
    let config: cpal::StreamConfig = supported.config();

    let (tx, rx) = mpsc::channel::<Vec<f32>>();
    let err_fn = |e: cpal::StreamError| tracing::warn!(error = %e, "Audio stream error");

    let stream = match supported.sample_format() {
        cpal::SampleFormat::F32 => device.build_input_stream(
            &config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                let _ = tx.send(data.to_vec());
            },
            err_fn,
            None,
        ),
        cpal::SampleFormat::I16 => device.build_input_stream(
            &config,
            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                let _ = tx.send(data.iter().map(|&s| s as f32 / 32768.0).collect());
            },
            err_fn,
            None,
        ),
        cpal::SampleFormat::U16 => device.build_input_stream(
            &config,
            move |data: &[u16], _: &cpal::InputCallbackInfo| {
                let _ = tx.send(data.iter().map(|&s| (s as f32 - 32768.0) / 32768.0).collect());
            },
            err_fn,
            None,
        ),
        format => {
            return Err(CaptureError::StreamFailed(format!(
                "unsupported sample format: {:?}",
                format
            )));
        }
    }
    .map_err(|e| CaptureError::StreamFailed(format!("open stream: {}", e)))?;

    stream
        .play()
        .map_err(|e| CaptureError::StreamFailed(format!("start stream: {}", e)))?;

    // The stream stays alive until this returns; dropping it releases the device.
    run_capture(&rx, channels, spec, sample_rate)
}

fn run_capture(
    rx: &mpsc::Receiver<Vec<f32>>,
    channels: usize,
    spec: CaptureSpec,
    sample_rate: u32,
) -> Result<AudioSample, CaptureError> {
    let frame = Duration::from_millis(FRAME_MS);

    // Ambient-noise calibration.
    let calibration_end = Instant::now() + spec.calibration;
    let mut ambient: Vec<f32> = Vec::new();
    while Instant::now() < calibration_end {
        match rx.recv_timeout(frame) {
            Ok(chunk) => ambient.extend(downmix(&chunk, channels)),
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(CaptureError::StreamFailed(
                    "input stream closed during calibration".to_string(),
                ));
            }
        }
    }
    let threshold = (rms(&ambient) * NOISE_MARGIN).max(MIN_THRESHOLD);
    tracing::debug!(threshold = threshold, "Ambient calibration complete");

    // Wait for speech onset, keeping a short pre-roll.
    let preroll_samples = (sample_rate as u64 * PREROLL_MS / 1000) as usize;
    let mut preroll: Vec<f32> = Vec::new();
    let mut recorded: Vec<f32> = Vec::new();
    let onset_deadline = Instant::now() + spec.start_timeout;
    loop {
        if Instant::now() >= onset_deadline {
            return Err(CaptureError::NoSpeechDetected);
        }
        let chunk = match rx.recv_timeout(frame) {
            Ok(chunk) => downmix(&chunk, channels),
            Err(mpsc::RecvTimeoutError::Timeout) => continue,
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                return Err(CaptureError::StreamFailed(
                    "input stream closed while waiting for speech".to_string(),
                ));
            }
        };
        if rms(&chunk) > threshold {
            recorded.extend_from_slice(&preroll);
            recorded.extend(chunk);
            break;
        }
        preroll.extend(chunk);
        let excess = preroll.len().saturating_sub(preroll_samples);
        preroll.drain(..excess);
    }

    // Record until trailing silence or the phrase cap.
    let max_samples =
        (sample_rate as u64 * spec.max_phrase.as_millis() as u64 / 1000) as usize;
    let silence_limit = Duration::from_millis(TRAILING_SILENCE_MS);
    let mut silent_for = Duration::ZERO;
    while recorded.len() < max_samples && silent_for < silence_limit {
        let chunk = match rx.recv_timeout(frame) {
            Ok(chunk) => downmix(&chunk, channels),
            Err(mpsc::RecvTimeoutError::Timeout) => {
                silent_for += frame;
                continue;
            }
            // Keep whatever was recorded before the stream went away.
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        };
        if rms(&chunk) > threshold {
            silent_for = Duration::ZERO;
        } else {
            silent_for += Duration::from_millis(chunk.len() as u64 * 1000 / sample_rate as u64);
        }
        recorded.extend(chunk);
    }
    recorded.truncate(max_samples);

    Ok(AudioSample::from_mono_f32(&recorded, sample_rate))
}

fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }
    interleaved
        .chunks(channels)
        .map(|frame| frame.iter().sum::<f32>() / frame.len() as f32)
        .collect()
}

fn rms(samples: &[f32]) -> f32 {
    if samples.is_empty() {
        return 0.0;
    }
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downmix_averages_interleaved_channels() {
        let stereo = [0.5, -0.5, 1.0, 0.0];
        assert_eq!(downmix(&stereo, 2), vec![0.0, 0.5]);
    }

    #[test]
    fn downmix_passes_mono_through() {
        let mono = [0.1, 0.2, 0.3];
        assert_eq!(downmix(&mono, 1), mono.to_vec());
    }

    #[test]
    fn rms_of_silence_is_zero() {
        assert_eq!(rms(&[0.0; 64]), 0.0);
        assert_eq!(rms(&[]), 0.0);
    }

    #[test]
    fn rms_of_constant_signal_is_its_amplitude() {
        let signal = [0.25; 128];
        assert!((rms(&signal) - 0.25).abs() < 1e-6);
    }
}
