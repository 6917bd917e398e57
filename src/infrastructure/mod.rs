pub mod audio;
pub mod detection;
pub mod llm;
pub mod observability;
pub mod translation;
