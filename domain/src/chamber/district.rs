//! District entity

use super::issue::Issue;
use crate::util::clamp_unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A constituency (immutable input to a run)
///
/// Districts are built by whatever data layer loaded them and are never
/// mutated afterwards. Members hold them behind an `Arc`.
///
/// # Example
///
/// ```
/// use congress_domain::chamber::{District, Issue};
///
/// let d = District::new("NV-01", "Nevada 1st")
///     .with_lean(1.4)
///     .with_population(700_000)
///     .with_weight(Issue::Economy, 0.6)
///     .with_weight(Issue::Healthcare, 0.4);
///
/// assert_eq!(d.lean, 1.0); // clamped
/// assert_eq!(d.top_issues(1), vec![Issue::Economy]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(alias = "district_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_fips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cd: Option<String>,
    /// Partisan lean, -1 (right) to +1 (left)
    #[serde(default, deserialize_with = "deserialize_unit")]
    pub lean: f64,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub demographics: BTreeMap<String, f64>,
    /// Issue salience; expected to sum to roughly 1 but not enforced
    #[serde(default)]
    pub weights: BTreeMap<Issue, f64>,
}

fn deserialize_unit<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    f64::deserialize(deserializer).map(clamp_unit)
}

impl District {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            state_fips: None,
            cd: None,
            lean: 0.0,
            population: 0,
            demographics: BTreeMap::new(),
            weights: BTreeMap::new(),
        }
    }

    pub fn with_lean(mut self, lean: f64) -> Self {
        self.lean = clamp_unit(lean);
        self
    }

    pub fn with_population(mut self, population: u64) -> Self {
        self.population = population;
        self
    }

    pub fn with_weight(mut self, issue: Issue, weight: f64) -> Self {
        self.weights.insert(issue, weight);
        self
    }

    pub fn with_demographic(mut self, key: impl Into<String>, value: f64) -> Self {
        self.demographics.insert(key.into(), value);
        self
    }

    /// Salience weight for `issue`, `0.0` when unweighted
    pub fn weight(&self, issue: Issue) -> f64 {
        self.weights.get(&issue).copied().unwrap_or(0.0)
    }

    /// The `n` most salient issues, heaviest first
    ///
    /// Ties keep canonical issue order.
    pub fn top_issues(&self, n: usize) -> Vec<Issue> {
        let mut ranked: Vec<(Issue, f64)> = self.weights.iter().map(|(i, w)| (*i, *w)).collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.into_iter().take(n).map(|(issue, _)| issue).collect()
    }

    /// Sampling weight: population floored at 1 so empty districts stay reachable
    pub fn sampling_weight(&self) -> u64 {
        self.population.max(1)
    }

    /// Lean descriptor used in rhetoric
    pub fn lean_descriptor(&self) -> &'static str {
        if self.lean > 0.15 {
            "left-leaning"
        } else if self.lean < -0.15 {
            "right-leaning"
        } else {
            "mixed"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_issues_order() {
        let d = District::new("d", "D")
            .with_weight(Issue::Climate, 0.2)
            .with_weight(Issue::Economy, 0.5)
            .with_weight(Issue::Education, 0.3);
        assert_eq!(d.top_issues(2), vec![Issue::Economy, Issue::Education]);
        assert_eq!(d.top_issues(10).len(), 3);
    }

    #[test]
    fn test_top_issues_tie_keeps_canonical_order() {
        let d = District::new("d", "D")
            .with_weight(Issue::Education, 0.5)
            .with_weight(Issue::Economy, 0.5);
        assert_eq!(d.top_issues(2), vec![Issue::Economy, Issue::Education]);
    }

    #[test]
    fn test_sampling_weight_floor() {
        assert_eq!(District::new("a", "A").sampling_weight(), 1);
        assert_eq!(
            District::new("b", "B").with_population(500).sampling_weight(),
            500
        );
    }

    #[test]
    fn test_lean_descriptor() {
        assert_eq!(District::new("a", "A").with_lean(0.4).lean_descriptor(), "left-leaning");
        assert_eq!(District::new("a", "A").with_lean(-0.4).lean_descriptor(), "right-leaning");
        assert_eq!(District::new("a", "A").with_lean(0.15).lean_descriptor(), "mixed");
    }

    #[test]
    fn test_deserialize_accepts_district_id_and_clamps_lean() {
        let json = r#"{
            "district_id": "32-01",
            "name": "Nevada 1",
            "state_fips": "32",
            "cd": "1",
            "lean": -1.5,
            "population": 712000,
            "demographics": {"median_income": 61000.0},
            "weights": {"economy": 0.4, "healthcare": 0.6}
        }"#;
        let d: District = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "32-01");
        assert_eq!(d.lean, -1.0);
        assert_eq!(d.population, 712000);
        assert_eq!(d.weight(Issue::Healthcare), 0.6);
        assert_eq!(d.weight(Issue::Climate), 0.0);
    }
}
