//! Orchestration value objects - immutable result types for a simulation run.
//!
//! - [`RoundResult`] - speeches and roll call of a single round
//! - [`SimulationResult`] - the complete run history and verdict

use super::entities::Bill;
use crate::chamber::IssueVector;
use crate::deliberation::{Speech, Stance};
use crate::quorum::VoteResult;
use serde::{Deserialize, Serialize};

/// One round of debate and voting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundResult {
    pub round_index: usize,
    /// The issue vector debated and voted on in this round
    pub issue_vector: IssueVector,
    /// Speeches in the order they were given
    pub speeches: Vec<Speech>,
    pub vote: VoteResult,
    /// Whether an amendment was proposed after this round's vote
    #[serde(default)]
    pub amended: bool,
}

impl RoundResult {
    pub fn new(
        round_index: usize,
        issue_vector: IssueVector,
        speeches: Vec<Speech>,
        vote: VoteResult,
    ) -> Self {
        Self {
            round_index,
            issue_vector,
            speeches,
            vote,
            amended: false,
        }
    }

    /// Mark this round as followed by an amendment, even one that left the
    /// issue vector unchanged
    pub fn with_amendment(mut self, amended: bool) -> Self {
        self.amended = amended;
        self
    }

    /// Number of speeches with the given stance
    pub fn stance_count(&self, stance: Stance) -> usize {
        self.speeches.iter().filter(|s| s.stance == stance).count()
    }
}

/// Complete result of a simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Number of members sampled
    pub members: usize,
    pub bill: Bill,
    pub rounds: Vec<RoundResult>,
    /// The last round's verdict; earlier rounds do not count
    pub final_passed: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl SimulationResult {
    /// Assemble a result; the verdict is taken from the last round
    pub fn new(members: usize, bill: Bill, rounds: Vec<RoundResult>) -> Self {
        let final_passed = rounds.last().map(|r| r.vote.passed).unwrap_or(false);
        Self {
            members,
            bill,
            rounds,
            final_passed,
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn last_round(&self) -> Option<&RoundResult> {
        self.rounds.last()
    }

    /// The issue vector in force at the end of the run
    pub fn final_issue_vector(&self) -> &IssueVector {
        self.rounds
            .last()
            .map(|r| &r.issue_vector)
            .unwrap_or(&self.bill.issue_vector)
    }

    /// Number of rounds whose vote was followed by an amendment
    pub fn amendments(&self) -> usize {
        self.rounds.iter().filter(|r| r.amended).count()
    }
}
