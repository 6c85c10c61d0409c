//! Configuration file loading for congress-sim
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./congress.toml` or `./.congress.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/congress-sim/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, DEFAULT_BASE_URL, FileConfig, FileDatasetConfig,
    FileGenerationConfig, FileOutputConfig, FileSimulationConfig,
    MAX_MULTIPLIER,
};
pub use loader::{ConfigLoadError, ConfigLoader};
