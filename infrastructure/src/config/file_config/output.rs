//! `[output]` section: how a finished run is printed

use congress_domain::OutputFormat;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// `full`, `summary` or `json`; unset means summary
    pub format: Option<OutputFormat>,
    pub color: bool,
}

impl FileOutputConfig {
    pub fn resolved_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Colors are off for JSON regardless of the `color` setting
    pub fn colors_enabled(&self) -> bool {
        self.color && self.resolved_format() != OutputFormat::Json
    }
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}
