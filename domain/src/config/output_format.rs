//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for simulation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Every round with all speeches and rationales
    Full,
    /// Roll call per round and the final verdict (default)
    #[default]
    Summary,
    /// JSON output
    Json,
}
