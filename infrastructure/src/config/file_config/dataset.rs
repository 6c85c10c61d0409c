//! Dataset selection from TOML (`[dataset]` section)
//!
//! ```toml
//! [dataset]
//! path = "data/districts.json"   # omit for the built-in mock chamber
//! multiplier = 3                 # split every district into 3
//! jitter = 0.12
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw dataset configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDatasetConfig {
    /// District JSON file; the built-in mock dataset when absent
    pub path: Option<PathBuf>,
    /// Sub-districts per district (1 = no splitting)
    pub multiplier: usize,
    pub jitter: f64,
}

impl Default for FileDatasetConfig {
    fn default() -> Self {
        Self {
            path: None,
            multiplier: 1,
            jitter: 0.12,
        }
    }
}
