mod mock_detector;
mod script_detector;

pub use mock_detector::MockLanguageDetector;
pub use script_detector::ScriptDetector;
