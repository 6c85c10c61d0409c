//! Vote tally for a chamber roll call
//!
//! Every member votes on every round; abstentions are excluded from the
//! denominator when deciding passage.

use crate::chamber::{IssueVector, Member};
use crate::deliberation::VoteChoice;
use serde::{Deserialize, Serialize};

/// Default share of decisive votes needed to pass
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Result of one roll call
///
/// # Example
///
/// ```
/// use congress_domain::quorum::VoteResult;
///
/// let result = VoteResult::from_counts(6, 4, 3, 0.5);
/// assert!(result.passed);
/// assert_eq!(result.vote_summary(), "6-4 (3 abstain)");
///
/// // universal abstention never passes
/// assert!(!VoteResult::from_counts(0, 0, 10, 0.5).passed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VoteResult {
    pub yes: usize,
    pub no: usize,
    pub abstain: usize,
    pub threshold: f64,
    pub passed: bool,
}

impl VoteResult {
    /// Build a result from raw counts
    ///
    /// `passed = yes / max(1, yes + no) >= threshold`
    pub fn from_counts(yes: usize, no: usize, abstain: usize, threshold: f64) -> Self {
        let decisive = (yes + no).max(1);
        let passed = yes as f64 / decisive as f64 >= threshold;
        Self {
            yes,
            no,
            abstain,
            threshold,
            passed,
        }
    }

    /// Total members who took part in the roll call
    pub fn total(&self) -> usize {
        self.yes + self.no + self.abstain
    }

    /// Share of yes among decisive votes (0.0 when nobody voted decisively)
    pub fn approval_ratio(&self) -> f64 {
        let decisive = self.yes + self.no;
        if decisive == 0 {
            0.0
        } else {
            self.yes as f64 / decisive as f64
        }
    }

    /// Compact summary, e.g. `"26-21 (3 abstain)"`
    pub fn vote_summary(&self) -> String {
        format!("{}-{} ({} abstain)", self.yes, self.no, self.abstain)
    }
}

/// Tally `roster` against `vector`
///
/// Deterministic: the same roster and vector always give the same counts.
pub fn tally(roster: &[Member], vector: &IssueVector, threshold: f64) -> VoteResult {
    let (mut yes, mut no, mut abstain) = (0, 0, 0);
    for member in roster {
        match VoteChoice::from_utility(member.utility(vector)) {
            VoteChoice::Yes => yes += 1,
            VoteChoice::No => no += 1,
            VoteChoice::Abstain => abstain += 1,
        }
    }
    VoteResult::from_counts(yes, no, abstain, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::{District, Issue};
    use std::sync::Arc;

    fn roster(lean: f64, ideologies: &[f64]) -> Vec<Member> {
        let district = Arc::new(
            District::new("d", "D")
                .with_lean(lean)
                .with_weight(Issue::Economy, 1.0),
        );
        ideologies
            .iter()
            .enumerate()
            .map(|(i, x)| Member::new(Member::sequential_id(i), Arc::clone(&district), *x))
            .collect()
    }

    #[test]
    fn test_counts_and_passage() {
        let members = roster(0.0, &[0.9, 0.5, 0.2, -0.6, 0.01]);
        let v = IssueVector::new().with(Issue::Economy, 1.0);
        let result = tally(&members, &v, DEFAULT_THRESHOLD);

        assert_eq!((result.yes, result.no, result.abstain), (3, 1, 1));
        assert!(result.passed);
        assert_eq!(result.total(), 5);
        assert_eq!(result.threshold, 0.5);
    }

    #[test]
    fn test_exact_threshold_passes() {
        let result = VoteResult::from_counts(5, 5, 0, 0.5);
        assert!(result.passed);
        assert!(!VoteResult::from_counts(4, 6, 0, 0.5).passed);
    }

    #[test]
    fn test_abstentions_excluded_from_denominator() {
        // 2 yes, 1 no, 20 abstain -> 2/3 passes
        let result = VoteResult::from_counts(2, 1, 20, 0.6);
        assert!(result.passed);
        assert!((result.approval_ratio() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_tally_is_deterministic() {
        let members = roster(0.3, &[0.8, -0.4, 0.05, -0.9, 0.33, 0.0]);
        let v = IssueVector::new()
            .with(Issue::Economy, 0.4)
            .with(Issue::Climate, -0.7);

        let first = tally(&members, &v, 0.5);
        let second = tally(&members, &v, 0.5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_vector_all_abstain_and_fails() {
        // zero-lean district: bias term vanishes along with every issue term
        let members = roster(0.0, &[0.9, -0.9, 0.4, -0.2, 1.0]);
        let v: IssueVector = Issue::ALL.iter().map(|i| (*i, 0.0)).collect();
        let result = tally(&members, &v, DEFAULT_THRESHOLD);

        assert_eq!(result.abstain, members.len());
        assert_eq!((result.yes, result.no), (0, 0));
        assert!(!result.passed);
    }

    #[test]
    fn test_empty_roster_fails() {
        let result = tally(&[], &IssueVector::new(), 0.5);
        assert_eq!(result.total(), 0);
        assert!(!result.passed);
    }
}
