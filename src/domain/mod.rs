pub mod language;
mod transcript;
mod translation;

pub use transcript::Transcript;
pub use translation::{InvalidRequest, ResolvedRequest, TranslationRequest};
