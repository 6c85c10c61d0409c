//! Dataset: an explicit, per-run set of districts

use super::district::District;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A loaded set of districts plus where it came from
///
/// A `Dataset` is handed to each run explicitly; there is no process-wide
/// "active" dataset. Districts are wrapped in `Arc` once here and shared by
/// every member sampled from them.
#[derive(Debug, Clone)]
pub struct Dataset {
    source: String,
    districts: Vec<Arc<District>>,
}

impl Dataset {
    pub fn new(source: impl Into<String>, districts: Vec<District>) -> Self {
        Self {
            source: source.into(),
            districts: districts.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn districts(&self) -> &[Arc<District>] {
        &self.districts
    }

    pub fn len(&self) -> usize {
        self.districts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.districts.is_empty()
    }

    /// Plain district values (cloned), e.g. for synthetic splitting
    pub fn to_districts(&self) -> Vec<District> {
        self.districts.iter().map(|d| District::clone(d)).collect()
    }

    pub fn summary(&self) -> DatasetSummary {
        let total_population: u64 = self.districts.iter().map(|d| d.population).sum();
        let mean_lean = if self.districts.is_empty() {
            0.0
        } else {
            self.districts.iter().map(|d| d.lean).sum::<f64>() / self.districts.len() as f64
        };

        DatasetSummary {
            source: self.source.clone(),
            count: self.districts.len(),
            total_population,
            mean_lean,
        }
    }
}

/// Short description of a dataset, for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub source: String,
    pub count: usize,
    pub total_population: u64,
    pub mean_lean: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let ds = Dataset::new(
            "mock",
            vec![
                District::new("a", "A").with_population(100).with_lean(0.5),
                District::new("b", "B").with_population(300).with_lean(-0.1),
            ],
        );
        let s = ds.summary();
        assert_eq!(s.source, "mock");
        assert_eq!(s.count, 2);
        assert_eq!(s.total_population, 400);
        assert!((s.mean_lean - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_empty_summary() {
        let ds = Dataset::new("none", vec![]);
        assert!(ds.is_empty());
        assert_eq!(ds.summary().mean_lean, 0.0);
    }
}
