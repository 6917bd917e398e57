mod error;
mod health;
mod speech;
mod translate;

pub use error::{ErrorBody, ErrorDetail, error_response};
pub use health::health_handler;
pub use speech::speech_to_text_handler;
pub use translate::translate_handler;
