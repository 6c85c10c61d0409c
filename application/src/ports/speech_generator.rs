//! Speech generator port
//!
//! Defines the interface for asking an external text service to write a
//! floor speech. Every failure here is recoverable: the round loop falls
//! back to the built-in template and never surfaces these errors to the
//! caller.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while generating a speech externally
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("Generation timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Service returned status {0}")]
    Status(u16),

    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Service returned empty text")]
    EmptyResponse,
}

/// One generation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub model: String,
    pub prompt: String,
}

impl GenerationRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
        }
    }
}

/// What came back from one generation attempt
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutcome {
    /// Usable, non-empty text
    Text(String),
    /// The service could not help; carries the reason for logging
    Unavailable(GenerationError),
}

impl GenerationOutcome {
    /// Normalize a raw generator result. Whitespace-only text counts as
    /// unavailable.
    pub fn from_result(result: Result<String, GenerationError>) -> Self {
        match result {
            Ok(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    GenerationOutcome::Unavailable(GenerationError::EmptyResponse)
                } else {
                    GenerationOutcome::Text(trimmed.to_string())
                }
            }
            Err(e) => GenerationOutcome::Unavailable(e),
        }
    }

    /// Take the generated text, or build the fallback
    pub fn or_else(self, fallback: impl FnOnce() -> String) -> String {
        match self {
            GenerationOutcome::Text(text) => text,
            GenerationOutcome::Unavailable(_) => fallback(),
        }
    }
}

/// Gateway for external speech generation
///
/// Implementations (adapters) live in the infrastructure layer. The caller
/// enforces the time budget; implementations may also apply their own.
#[async_trait]
pub trait SpeechGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;
}

/// Generator that is never reachable. Used when the run is template-only.
pub struct NoGenerator;

#[async_trait]
impl SpeechGenerator for NoGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<String, GenerationError> {
        Err(GenerationError::Transport(
            "external generation disabled".to_string(),
        ))
    }
}
