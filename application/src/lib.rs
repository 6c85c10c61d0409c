//! Application layer for congress-sim
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{GenerationMode, SimulationParams};
pub use ports::{
    progress::{NoProgress, SimulationProgress},
    speech_generator::{
        GenerationError, GenerationOutcome, GenerationRequest, NoGenerator, SpeechGenerator,
    },
};
pub use use_cases::run_simulation::{RunSimulationError, RunSimulationInput, RunSimulationUseCase};
