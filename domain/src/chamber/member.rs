//! Member entity and utility computation

use super::district::District;
use super::issue::IssueVector;
use crate::util::clamp_unit;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Synthetic rationale key for the district-lean bias term
pub const LEAN_BIAS_KEY: &str = "district_lean_bias";

/// Weight of the district-lean bias term in a member's utility
pub const LEAN_BIAS_WEIGHT: f64 = 0.25;

/// Cosmetic party label (never consulted by voting)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyHint {
    Blue,
    Red,
    Purple,
}

impl PartyHint {
    /// Label derived from ideology at ±0.15
    pub fn from_ideology(ideology: f64) -> Self {
        if ideology > 0.15 {
            PartyHint::Blue
        } else if ideology < -0.15 {
            PartyHint::Red
        } else {
            PartyHint::Purple
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartyHint::Blue => "Blue",
            PartyHint::Red => "Red",
            PartyHint::Purple => "Purple",
        }
    }
}

impl std::fmt::Display for PartyHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-issue utility contributions, plus the lean bias under [`LEAN_BIAS_KEY`]
pub type Rationale = BTreeMap<String, f64>;

/// A simulated legislator
///
/// Created once during sampling and immutable for the rest of the run.
#[derive(Debug, Clone)]
pub struct Member {
    id: String,
    district: Arc<District>,
    ideology: f64,
    party: PartyHint,
}

impl Member {
    /// Create a member; ideology is clamped and the party label derived from it
    pub fn new(id: impl Into<String>, district: Arc<District>, ideology: f64) -> Self {
        let ideology = clamp_unit(ideology);
        Self {
            id: id.into(),
            district,
            ideology,
            party: PartyHint::from_ideology(ideology),
        }
    }

    /// Run-scoped sequential id for the `index`-th member (0-based)
    pub fn sequential_id(index: usize) -> String {
        format!("M-{:04}", index + 1)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn district(&self) -> &District {
        &self.district
    }

    pub fn ideology(&self) -> f64 {
        self.ideology
    }

    pub fn party(&self) -> PartyHint {
        self.party
    }

    /// Utility contributions broken down by issue
    ///
    /// Each issue in `vector` contributes `weight * position * ideology`; the
    /// lean bias `0.25 * lean * ideology` is always present.
    pub fn utility_by_issue(&self, vector: &IssueVector) -> Rationale {
        let mut contributions: Rationale = vector
            .iter()
            .map(|(issue, position)| {
                (
                    issue.as_str().to_string(),
                    self.district.weight(issue) * position * self.ideology,
                )
            })
            .collect();
        contributions.insert(LEAN_BIAS_KEY.to_string(), self.lean_bias());
        contributions
    }

    /// Total utility of `vector` for this member
    pub fn utility(&self, vector: &IssueVector) -> f64 {
        let issues: f64 = vector
            .iter()
            .map(|(issue, position)| self.district.weight(issue) * position * self.ideology)
            .sum();
        issues + self.lean_bias()
    }

    fn lean_bias(&self) -> f64 {
        LEAN_BIAS_WEIGHT * self.district.lean * self.ideology
    }
}
