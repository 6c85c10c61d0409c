//! Simulation parameters: run-level knobs chosen once per run.
//!
//! [`SimulationParams`] groups everything the round loop in
//! [`RunSimulationUseCase`](crate::use_cases::run_simulation::RunSimulationUseCase)
//! needs besides the dataset and the bill. Bounds are checked by
//! [`SimulationParams::validate`] before any sampling happens.

use congress_domain::{DEFAULT_SPOKESPEOPLE, DEFAULT_THRESHOLD, DomainError};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::time::Duration;

/// Accepted roster sizes
pub const MEMBER_RANGE: RangeInclusive<usize> = 10..=1000;

/// Accepted round counts
pub const ROUND_RANGE: RangeInclusive<usize> = 1..=10;

/// Default model identifier for external generation
pub const DEFAULT_MODEL: &str = "llama3.1:8b";

/// Default time budget for one external generation call
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(20);

/// How speech text is produced, selected once per run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum GenerationMode {
    /// Built-in templates only, no external calls
    Template,
    /// Ask the external service, fall back to templates on any failure
    External {
        model: String,
        #[serde(with = "duration_secs")]
        timeout: Duration,
    },
}

impl Default for GenerationMode {
    fn default() -> Self {
        GenerationMode::Template
    }
}

impl GenerationMode {
    pub fn external(model: impl Into<String>) -> Self {
        GenerationMode::External {
            model: model.into(),
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, GenerationMode::External { .. })
    }

    pub fn describe(&self) -> String {
        match self {
            GenerationMode::Template => "template".to_string(),
            GenerationMode::External { model, timeout } => {
                format!("external ({}, {}s budget)", model, timeout.as_secs())
            }
        }
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        u64::deserialize(d).map(Duration::from_secs)
    }
}

/// Run-level parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParams {
    /// Number of members to sample
    pub members: usize,
    /// Number of debate/vote rounds
    pub rounds: usize,
    /// Share of decisive votes needed to pass
    pub threshold: f64,
    /// Maximum speakers per round
    pub spokespeople: usize,
    /// Seed for reproducible runs; `None` draws from entropy
    pub seed: Option<u64>,
    pub generation: GenerationMode,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            members: 200,
            rounds: 3,
            threshold: DEFAULT_THRESHOLD,
            spokespeople: DEFAULT_SPOKESPEOPLE,
            seed: None,
            generation: GenerationMode::Template,
        }
    }
}

impl SimulationParams {
    // ==================== Builder Methods ====================

    pub fn with_members(mut self, members: usize) -> Self {
        self.members = members;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_spokespeople(mut self, cap: usize) -> Self {
        self.spokespeople = cap;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_generation(mut self, generation: GenerationMode) -> Self {
        self.generation = generation;
        self
    }

    // ==================== Validation ====================

    /// Reject values outside the accepted bounds
    pub fn validate(&self) -> Result<(), DomainError> {
        check_range("members", self.members, &MEMBER_RANGE)?;
        check_range("rounds", self.rounds, &ROUND_RANGE)?;
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(DomainError::out_of_range("threshold", self.threshold, 0.0, 1.0));
        }
        if self.spokespeople == 0 {
            return Err(DomainError::out_of_range(
                "spokespeople",
                0.0,
                1.0,
                *MEMBER_RANGE.end() as f64,
            ));
        }
        if let GenerationMode::External { model, timeout } = &self.generation {
            if model.trim().is_empty() {
                return Err(DomainError::InvalidInput(
                    "external generation needs a model identifier".to_string(),
                ));
            }
            if timeout.is_zero() {
                return Err(DomainError::out_of_range("generation timeout", 0.0, 1.0, 600.0));
            }
        }
        Ok(())
    }
}

fn check_range(
    field: &str,
    value: usize,
    range: &RangeInclusive<usize>,
) -> Result<(), DomainError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::out_of_range(
            field,
            value as f64,
            *range.start() as f64,
            *range.end() as f64,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = SimulationParams::default();
        assert_eq!(params.members, 200);
        assert_eq!(params.rounds, 3);
        assert_eq!(params.threshold, 0.5);
        assert_eq!(params.spokespeople, 7);
        assert!(params.seed.is_none());
        assert_eq!(params.generation, GenerationMode::Template);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let params = SimulationParams::default()
            .with_members(50)
            .with_rounds(1)
            .with_seed(7)
            .with_generation(GenerationMode::external("llama3.1:8b"));

        assert_eq!(params.members, 50);
        assert_eq!(params.rounds, 1);
        assert_eq!(params.seed, Some(7));
        assert!(params.generation.is_external());
    }

    #[test]
    fn test_members_out_of_range() {
        let err = SimulationParams::default().with_members(5).validate().unwrap_err();
        assert!(matches!(
            err,
            DomainError::ConfigurationOutOfRange { ref field, .. } if field == "members"
        ));
        assert!(SimulationParams::default().with_members(1001).validate().is_err());
    }

    #[test]
    fn test_rounds_out_of_range() {
        assert!(SimulationParams::default().with_rounds(0).validate().is_err());
        assert!(SimulationParams::default().with_rounds(11).validate().is_err());
        assert!(SimulationParams::default().with_rounds(10).validate().is_ok());
    }

    #[test]
    fn test_threshold_and_cap() {
        assert!(SimulationParams::default().with_threshold(1.2).validate().is_err());
        assert!(SimulationParams::default().with_spokespeople(0).validate().is_err());
    }

    #[test]
    fn test_external_needs_model() {
        let params = SimulationParams::default().with_generation(GenerationMode::external("  "));
        assert!(matches!(params.validate(), Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_describe() {
        assert_eq!(GenerationMode::Template.describe(), "template");
        assert_eq!(
            GenerationMode::external("llama3.1:8b").describe(),
            "external (llama3.1:8b, 20s budget)"
        );
    }
}
