mod settings;

pub use settings::{
    CorsSettings, ServerSettings, Settings, SpeechSettings, TranslationSettings,
};
