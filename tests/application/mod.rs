use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use parlance::application::ports::{
    AudioSample, CaptureDevice, CaptureError, CaptureSpec, LlmClient, LlmClientError,
    ProviderStage, TranslationEngine, TranslationEngineError,
};
use parlance::application::services::{SpeechCaptureService, SpeechError, TranslationService};
use parlance::domain::TranslationRequest;
use parlance::infrastructure::audio::{MockCaptureDevice, MockSpeechRecognizer};
use parlance::infrastructure::detection::MockLanguageDetector;
use parlance::infrastructure::llm::MockLlmClient;
use parlance::infrastructure::translation::MockTranslationEngine;

struct SlowDevice {
    delay: Duration,
}

#[async_trait::async_trait]
impl CaptureDevice for SlowDevice {
    async fn probe(&self) -> Result<(), CaptureError> {
        Ok(())
    }

    async fn listen(&self, _spec: CaptureSpec) -> Result<AudioSample, CaptureError> {
        tokio::time::sleep(self.delay).await;
        Ok(AudioSample::from_mono_f32(&[0.0; 1600], 16_000))
    }
}

struct AlwaysSilentDevice;

#[async_trait::async_trait]
impl CaptureDevice for AlwaysSilentDevice {
    async fn probe(&self) -> Result<(), CaptureError> {
        Ok(())
    }

    async fn listen(&self, _spec: CaptureSpec) -> Result<AudioSample, CaptureError> {
        Err(CaptureError::NoSpeechDetected)
    }
}

struct EngineOffline;

#[async_trait::async_trait]
impl TranslationEngine for EngineOffline {
    async fn translate(
        &self,
        _text: &str,
        _source_lang: &str,
        _target_lang: &str,
    ) -> Result<String, TranslationEngineError> {
        Err(TranslationEngineError::ApiRequestFailed(
            "engine offline".to_string(),
        ))
    }
}

struct RecordingLlm {
    prompts: Arc<StdMutex<Vec<String>>>,
}

#[async_trait::async_trait]
impl LlmClient for RecordingLlm {
    async fn complete(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("Hello, world!".to_string())
    }
}

fn speech_service_with<A>(
    device: Arc<A>,
) -> SpeechCaptureService<A, MockSpeechRecognizer, MockLanguageDetector>
where
    A: CaptureDevice + 'static,
{
    SpeechCaptureService::new(
        device,
        Arc::new(MockSpeechRecognizer::new("hello there", Some(0.9))),
        Arc::new(MockLanguageDetector::new("en")),
        CaptureSpec::default(),
        "en",
    )
}

#[tokio::test]
async fn given_capture_in_progress_when_second_capture_arrives_then_device_busy() {
    let service = speech_service_with(Arc::new(SlowDevice {
        delay: Duration::from_millis(200),
    }));

    let (first, second) = tokio::join!(
        service.capture_and_transcribe(),
        service.capture_and_transcribe()
    );

    let results = [&first, &second];
    let busy = results
        .iter()
        .filter(|r| matches!(r, Err(SpeechError::DeviceBusy)))
        .count();
    let completed = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(busy, 1);
    assert_eq!(completed, 1);
}

#[tokio::test]
async fn given_failed_capture_when_capturing_again_then_lease_is_released() {
    let service = speech_service_with(Arc::new(AlwaysSilentDevice));

    assert!(matches!(
        service.capture_and_transcribe().await,
        Err(SpeechError::NoSpeechDetected)
    ));
    // The second attempt must fail for the same reason, not with DeviceBusy.
    assert!(matches!(
        service.capture_and_transcribe().await,
        Err(SpeechError::NoSpeechDetected)
    ));
}

#[tokio::test]
async fn given_successful_capture_when_capturing_again_then_lease_is_released() {
    let service = speech_service_with(Arc::new(MockCaptureDevice::default()));

    assert!(service.capture_and_transcribe().await.is_ok());
    assert!(service.capture_and_transcribe().await.is_ok());
}

#[tokio::test]
async fn given_failing_engine_when_translate_then_outcome_keeps_llm_and_warns() {
    let service = TranslationService::new(
        Arc::new(MockLanguageDetector::new("es")),
        Arc::new(EngineOffline),
        Arc::new(MockLlmClient::new("Hello, world!")),
    );
    let request = TranslationRequest::new("Hola mundo", "en", Some("es")).unwrap();

    let outcome = service.translate(request).await.unwrap();

    assert_eq!(outcome.traditional, None);
    assert_eq!(outcome.llm.as_deref(), Some("Hello, world!"));
    assert_eq!(outcome.warnings.len(), 1);
    assert_eq!(
        outcome.warnings[0].stage,
        ProviderStage::TraditionalTranslation
    );
}

#[tokio::test]
async fn given_resolved_request_when_translate_then_prompt_embeds_languages_and_text() {
    let prompts = Arc::new(StdMutex::new(Vec::new()));
    let service = TranslationService::new(
        Arc::new(MockLanguageDetector::new("es")),
        Arc::new(MockTranslationEngine::new("Hello world")),
        Arc::new(RecordingLlm {
            prompts: Arc::clone(&prompts),
        }),
    );
    let request = TranslationRequest::new("Hola mundo", "en", Some("es")).unwrap();

    service.translate(request).await.unwrap();

    let prompts = prompts.lock().unwrap();
    assert_eq!(
        prompts.as_slice(),
        ["Translate this text from es to en: Hola mundo"]
    );
}

#[test]
fn audio_sample_from_f32_quantizes_to_little_endian_pcm() {
    let sample = AudioSample::from_mono_f32(&[0.0, 1.0, -1.0], 16_000);

    assert_eq!(sample.pcm.len(), 6);
    assert_eq!(&sample.pcm[0..2], &0i16.to_le_bytes());
    assert_eq!(&sample.pcm[2..4], &i16::MAX.to_le_bytes());
    assert_eq!(&sample.pcm[4..6], &(-i16::MAX).to_le_bytes());
    assert!((sample.duration_secs() - 3.0 / 16_000.0).abs() < 1e-9);
}
