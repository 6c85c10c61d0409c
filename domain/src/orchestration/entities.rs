//! Orchestration domain entities

use crate::chamber::IssueVector;
use serde::{Deserialize, Serialize};

/// Step of a simulation run
///
/// ```text
/// Init ─► (SelectSpokespeople ─► GenerateSpeeches ─► Tally ─► Branch) × rounds ─► Finalize
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Roster sampled once for the whole run
    Init,
    SelectSpokespeople,
    GenerateSpeeches,
    Tally,
    /// Amend after a failed non-final round, otherwise carry forward
    Branch,
    Finalize,
}

impl RoundPhase {
    pub fn as_str(&self) -> &str {
        match self {
            RoundPhase::Init => "init",
            RoundPhase::SelectSpokespeople => "select_spokespeople",
            RoundPhase::GenerateSpeeches => "generate_speeches",
            RoundPhase::Tally => "tally",
            RoundPhase::Branch => "branch",
            RoundPhase::Finalize => "finalize",
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            RoundPhase::Init => "Sampling Chamber",
            RoundPhase::SelectSpokespeople => "Selecting Spokespeople",
            RoundPhase::GenerateSpeeches => "Floor Debate",
            RoundPhase::Tally => "Roll Call",
            RoundPhase::Branch => "Amendment",
            RoundPhase::Finalize => "Final Verdict",
        }
    }
}

impl std::fmt::Display for RoundPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A bill put before the chamber
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub issue_vector: IssueVector,
}

impl Bill {
    pub fn new(title: impl Into<String>, issue_vector: IssueVector) -> Self {
        Self {
            title: title.into(),
            summary: String::new(),
            issue_vector,
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
