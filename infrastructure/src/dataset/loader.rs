//! JSON district loader and synthetic splitting

use congress_domain::{Dataset, District, DomainError, split_districts};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Source label of the built-in dataset
pub const MOCK_SOURCE: &str = "mock";

const MOCK_DISTRICTS: &str = include_str!("../../data/mock_districts.json");

/// Errors that can occur while loading districts or bills
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} contains no districts")]
    Empty(String),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Accepted file layouts: a bare array, or an object with a `districts` key
#[derive(Deserialize)]
#[serde(untagged)]
enum DistrictFile {
    List(Vec<District>),
    Wrapped { districts: Vec<District> },
}

impl DistrictFile {
    fn into_districts(self) -> Vec<District> {
        match self {
            DistrictFile::List(d) | DistrictFile::Wrapped { districts: d } => d,
        }
    }
}

/// Loads district datasets
pub struct DatasetLoader;

impl DatasetLoader {
    /// The built-in mock chamber
    pub fn mock() -> Result<Dataset, DatasetError> {
        Self::parse(MOCK_SOURCE, MOCK_DISTRICTS)
    }

    /// Load districts from a JSON file
    pub fn from_path(path: &Path) -> Result<Dataset, DatasetError> {
        let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::parse(&path.display().to_string(), &raw)?;
        info!(
            "Loaded {} districts from {}",
            dataset.len(),
            path.display()
        );
        Ok(dataset)
    }

    /// Load from `path` when given, the mock chamber otherwise
    pub fn load(path: Option<&Path>) -> Result<Dataset, DatasetError> {
        match path {
            Some(p) => Self::from_path(p),
            None => Self::mock(),
        }
    }

    /// Parse a JSON document of district records
    pub fn parse(origin: &str, raw: &str) -> Result<Dataset, DatasetError> {
        let districts = serde_json::from_str::<DistrictFile>(raw)
            .map_err(|source| DatasetError::Parse {
                origin: origin.to_string(),
                source,
            })?
            .into_districts();

        if districts.is_empty() {
            return Err(DatasetError::Empty(origin.to_string()));
        }
        Ok(Dataset::new(origin, districts))
    }

    /// Split every district of `base` into `multiplier` jittered sub-districts
    ///
    /// Returns `base` untouched when `multiplier <= 1`.
    pub fn synthesize(
        base: &Dataset,
        multiplier: usize,
        jitter: f64,
        seed: Option<u64>,
    ) -> Result<Dataset, DatasetError> {
        if multiplier <= 1 {
            return Ok(base.clone());
        }

        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let districts = split_districts(&base.to_districts(), multiplier, jitter, &mut rng)?;
        debug!(
            "Split {} districts into {} (jitter {})",
            base.len(),
            districts.len(),
            jitter
        );

        let source = format!("{} (synthetic x{})", base.source(), multiplier);
        Ok(Dataset::new(source, districts))
    }
}
