//! Application-level configuration.
//!
//! - [`SimulationParams`] - roster size, rounds, threshold, seed
//! - [`GenerationMode`] - template-only or external generation with fallback

pub mod simulation_params;

pub use simulation_params::{
    DEFAULT_GENERATION_TIMEOUT, DEFAULT_MODEL, GenerationMode, MEMBER_RANGE, ROUND_RANGE,
    SimulationParams,
};
