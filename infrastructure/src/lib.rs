//! Infrastructure layer for congress-sim
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration file and dataset loading.

pub mod config;
pub mod dataset;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoadError, ConfigLoader, ConfigValidationError, FileConfig, FileDatasetConfig, FileGenerationConfig,
    FileOutputConfig, FileSimulationConfig,
};
pub use dataset::{BillLoader, DatasetError, DatasetLoader};
pub use ollama::OllamaSpeechGenerator;
