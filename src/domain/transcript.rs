/// A recognized utterance with its language tag.
///
/// `confidence` is best-effort metadata from the recognizer; absence is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    pub text: String,
    pub lang: String,
    pub confidence: Option<f32>,
}
