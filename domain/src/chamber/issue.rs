//! Policy issues and the bill position across them

use crate::util::clamp_unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the fixed policy dimensions a bill is scored on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Issue {
    Economy,
    Climate,
    Healthcare,
    Immigration,
    Education,
}

impl Issue {
    /// All issues, in canonical order
    pub const ALL: [Issue; 5] = [
        Issue::Economy,
        Issue::Climate,
        Issue::Healthcare,
        Issue::Immigration,
        Issue::Education,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Issue::Economy => "economy",
            Issue::Climate => "climate",
            Issue::Healthcare => "healthcare",
            Issue::Immigration => "immigration",
            Issue::Education => "education",
        }
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Issue {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "economy" => Ok(Issue::Economy),
            "climate" => Ok(Issue::Climate),
            "healthcare" => Ok(Issue::Healthcare),
            "immigration" => Ok(Issue::Immigration),
            "education" => Ok(Issue::Education),
            other => Err(format!(
                "Unknown issue: {}. Valid: economy, climate, healthcare, immigration, education",
                other
            )),
        }
    }
}

/// A bill's position on each issue, each value in `[-1, 1]`
///
/// Positive values point in the progressive direction. Issues that are not
/// present contribute nothing to any utility computation. Values are clamped
/// on the way in, so an `IssueVector` never holds an out-of-range entry.
///
/// Amendments never mutate a vector in place; they produce a new one, which
/// keeps every round's vector available in the history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Issue, f64>", into = "BTreeMap<Issue, f64>")]
pub struct IssueVector {
    values: BTreeMap<Issue, f64>,
}

impl IssueVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert (value is clamped)
    pub fn with(mut self, issue: Issue, value: f64) -> Self {
        self.set(issue, value);
        self
    }

    pub fn set(&mut self, issue: Issue, value: f64) {
        self.values.insert(issue, clamp_unit(value));
    }

    /// Position on `issue`, `0.0` when absent
    pub fn get(&self, issue: Issue) -> f64 {
        self.values.get(&issue).copied().unwrap_or(0.0)
    }

    pub fn contains(&self, issue: Issue) -> bool {
        self.values.contains_key(&issue)
    }

    /// Present issues and their positions, in canonical issue order
    pub fn iter(&self) -> impl Iterator<Item = (Issue, f64)> + '_ {
        self.values.iter().map(|(issue, value)| (*issue, *value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Apply `f` to every present value, producing a new (clamped) vector
    pub fn map_values(&self, mut f: impl FnMut(Issue, f64) -> f64) -> Self {
        self.values
            .iter()
            .map(|(issue, value)| (*issue, f(*issue, *value)))
            .collect()
    }

    /// Parse `issue=value` pairs, e.g. `economy=0.6`
    pub fn parse_pair(s: &str) -> Result<(Issue, f64), String> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Expected issue=value, got '{}'", s))?;
        let issue: Issue = name.parse()?;
        let value: f64 = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid value for {}: '{}'", issue, value.trim()))?;
        Ok((issue, value))
    }
}

impl FromIterator<(Issue, f64)> for IssueVector {
    fn from_iter<T: IntoIterator<Item = (Issue, f64)>>(iter: T) -> Self {
        let mut vector = IssueVector::new();
        for (issue, value) in iter {
            vector.set(issue, value);
        }
        vector
    }
}

impl From<BTreeMap<Issue, f64>> for IssueVector {
    fn from(values: BTreeMap<Issue, f64>) -> Self {
        values.into_iter().collect()
    }
}

impl From<IssueVector> for BTreeMap<Issue, f64> {
    fn from(vector: IssueVector) -> Self {
        vector.values
    }
}
