mod cpal_capture_device;
mod google_speech_client;
mod mock_capture_device;
mod mock_recognizer;

pub use cpal_capture_device::CpalCaptureDevice;
pub use google_speech_client::GoogleSpeechClient;
pub use mock_capture_device::MockCaptureDevice;
pub use mock_recognizer::MockSpeechRecognizer;
