//! External speech generation from TOML (`[generation]` section)
//!
//! ```toml
//! [generation]
//! enabled = true
//! model = "llama3.1:8b"
//! base_url = "http://localhost:11434"
//! timeout_seconds = 20
//! ```

use congress_application::config::{DEFAULT_GENERATION_TIMEOUT, DEFAULT_MODEL};
use congress_application::GenerationMode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default address of a local Ollama server
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Raw generation configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Ask the external service for speeches (templates otherwise)
    pub enabled: bool,
    pub model: String,
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: DEFAULT_GENERATION_TIMEOUT.as_secs(),
        }
    }
}

impl FileGenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Generation mode selected by this section
    pub fn to_mode(&self) -> GenerationMode {
        if self.enabled {
            GenerationMode::External {
                model: self.model.clone(),
                timeout: self.timeout(),
            }
        } else {
            GenerationMode::Template
        }
    }
}
