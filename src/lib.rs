//! Multi-provider translation and speech-capture service.
//!
//! Two HTTP endpoints front five external collaborators: a language detector,
//! a deterministic dictionary translation engine, an LLM chat client, an audio
//! capture device, and a remote speech recognizer. The orchestration lives in
//! `application::services`; everything external is a port with an
//! infrastructure adapter.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
