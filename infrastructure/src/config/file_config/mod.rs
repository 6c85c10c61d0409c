//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod dataset;
mod generation;
mod output;
mod simulation;

pub use dataset::FileDatasetConfig;
pub use generation::{DEFAULT_BASE_URL, FileGenerationConfig};
pub use output::FileOutputConfig;
pub use simulation::FileSimulationConfig;

use congress_application::SimulationParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Largest accepted `[dataset] multiplier`
pub const MAX_MULTIPLIER: usize = 20;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("generation.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("generation.model cannot be empty")]
    EmptyModelName,

    #[error("generation.base_url must start with http:// or https:// (got '{0}')")]
    InvalidBaseUrl(String),

    #[error("dataset.multiplier must be between 1 and 20 (got {0})")]
    InvalidMultiplier(usize),

    #[error("dataset.jitter must be between 0 and 1 (got {0})")]
    InvalidJitter(f64),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Roster and round settings
    pub simulation: FileSimulationConfig,
    /// External speech generation
    pub generation: FileGenerationConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Which districts to load
    pub dataset: FileDatasetConfig,
}

impl FileConfig {
    /// Validate the parts of the file that no other layer checks
    ///
    /// Roster and round bounds are checked by [`SimulationParams::validate`]
    /// once CLI overrides have been applied.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.generation.enabled {
            if self.generation.timeout_seconds == 0 {
                return Err(ConfigValidationError::InvalidTimeout);
            }
            if self.generation.model.trim().is_empty() {
                return Err(ConfigValidationError::EmptyModelName);
            }
        }
        let url = &self.generation.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigValidationError::InvalidBaseUrl(url.clone()));
        }
        if !(1..=MAX_MULTIPLIER).contains(&self.dataset.multiplier) {
            return Err(ConfigValidationError::InvalidMultiplier(
                self.dataset.multiplier,
            ));
        }
        if !(0.0..=1.0).contains(&self.dataset.jitter) {
            return Err(ConfigValidationError::InvalidJitter(self.dataset.jitter));
        }
        Ok(())
    }

    /// Run parameters described by this file
    pub fn to_simulation_params(&self) -> SimulationParams {
        let sim = &self.simulation;
        let mut params = SimulationParams::default()
            .with_members(sim.members)
            .with_rounds(sim.rounds)
            .with_threshold(sim.threshold)
            .with_spokespeople(sim.spokespeople)
            .with_generation(self.generation.to_mode());
        params.seed = sim.seed;
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congress_application::GenerationMode;
    use congress_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[simulation]
members = 400
rounds = 4
threshold = 0.6
seed = 7

[generation]
enabled = true
model = "llama3.1:8b"
base_url = "http://127.0.0.1:11434"
timeout_seconds = 10

[output]
format = "full"
color = false

[dataset]
multiplier = 2
jitter = 0.2
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.members, 400);
        assert_eq!(config.simulation.threshold, 0.6);
        assert!(config.generation.enabled);
        assert_eq!(config.generation.base_url, "http://127.0.0.1:11434");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);
        assert_eq!(config.dataset.multiplier, 2);
        assert!(config.validate().is_ok());

        let params = config.to_simulation_params();
        assert_eq!(params.members, 400);
        assert_eq!(params.rounds, 4);
        assert_eq!(params.seed, Some(7));
        assert!(params.generation.is_external());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.output.color);
        assert!(config.dataset.path.is_none());

        let params = config.to_simulation_params();
        assert_eq!(params, SimulationParams::default());
        assert_eq!(params.generation, GenerationMode::Template);
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let toml_str = r#"
[generation]
enabled = true
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidTimeout)
        );
    }

    #[test]
    fn test_validate_ignores_timeout_when_disabled() {
        let toml_str = r#"
[generation]
timeout_seconds = 0
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_dataset() {
        let mut config = FileConfig::default();
        config.dataset.multiplier = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidMultiplier(0))
        );

        let mut config = FileConfig::default();
        config.dataset.jitter = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidJitter(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_url() {
        let mut config = FileConfig::default();
        config.generation.base_url = "localhost:11434".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBaseUrl(_))
        ));
    }
}
