//! Orchestration domain: the shape of a run and its results
//!
//! The round loop itself lives in the application layer
//! (`RunSimulationUseCase`); this module only defines the phases it steps
//! through and the immutable values it produces.

pub mod entities;
pub mod value_objects;

pub use entities::{Bill, RoundPhase};
pub use value_objects::{RoundResult, SimulationResult};
