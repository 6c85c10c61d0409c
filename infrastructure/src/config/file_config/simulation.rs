//! Simulation configuration from TOML (`[simulation]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [simulation]
//! members = 300
//! rounds = 5
//! threshold = 0.6
//! spokespeople = 7
//! seed = 42
//! ```

use congress_application::SimulationParams;
use serde::{Deserialize, Serialize};

/// Raw simulation configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSimulationConfig {
    pub members: usize,
    pub rounds: usize,
    pub threshold: f64,
    pub spokespeople: usize,
    pub seed: Option<u64>,
}

impl Default for FileSimulationConfig {
    fn default() -> Self {
        let params = SimulationParams::default();
        Self {
            members: params.members,
            rounds: params.rounds,
            threshold: params.threshold,
            spokespeople: params.spokespeople,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_config_default() {
        let config = FileSimulationConfig::default();
        assert_eq!(config.members, 200);
        assert_eq!(config.rounds, 3);
        assert_eq!(config.threshold, 0.5);
        assert_eq!(config.spokespeople, 7);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_simulation_config_partial() {
        let toml_str = r#"
[simulation]
rounds = 6
seed = 1234
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.simulation.rounds, 6);
        assert_eq!(config.simulation.seed, Some(1234));
        assert_eq!(config.simulation.members, 200);
    }
}
