//! Ollama adapter for the speech generator port

mod generator;

pub use generator::OllamaSpeechGenerator;
