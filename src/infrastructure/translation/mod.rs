mod mock_translation_engine;
mod mymemory_client;

pub use mock_translation_engine::MockTranslationEngine;
pub use mymemory_client::MyMemoryClient;
