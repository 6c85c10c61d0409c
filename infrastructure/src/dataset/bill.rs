//! Bill files

use super::loader::DatasetError;
use congress_domain::Bill;
use std::path::Path;

/// Loads bills from JSON files
pub struct BillLoader;

impl BillLoader {
    /// Read a bill (`title`, optional `summary`, `issue_vector`) from a JSON file
    ///
    /// Issue values outside [-1, 1] are clamped on load.
    pub fn from_path(path: &Path) -> Result<Bill, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&path.display().to_string(), &raw)
    }

    pub fn parse(origin: &str, raw: &str) -> Result<Bill, DatasetError> {
        serde_json::from_str(raw).map_err(|source| DatasetError::Parse {
            origin: origin.to_string(),
            source,
        })
    }
}
