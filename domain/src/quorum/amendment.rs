//! Amendment proposal between failed rounds
//!
//! The sponsor reacts to a failed vote by looking at the chamber's median
//! member. Issues that point against the median are conceded a little;
//! issues that already agree with it are pushed further.

use crate::chamber::{IssueVector, Member};
use crate::util::{clamp_unit, sign};

/// Factor applied to an issue that points against the median member
pub const CONCESSION_FACTOR: f64 = 0.88;

/// Step taken on an issue that agrees with the median member
pub const NUDGE_STEP: f64 = 0.08;

/// Issues weaker than this are left alone unless conceded
pub const NUDGE_FLOOR: f64 = 0.2;

/// Median ideology of the roster: `sorted[floor(n / 2)]`, or `0.0` when empty
pub fn median_ideology(roster: &[Member]) -> f64 {
    let mut ideologies: Vec<f64> = roster.iter().map(|m| m.ideology()).collect();
    if ideologies.is_empty() {
        return 0.0;
    }
    ideologies.sort_by(|a, b| a.total_cmp(b));
    ideologies[ideologies.len() / 2]
}

/// Produce the next round's issue vector after a failed vote
///
/// For every position `v`:
/// - `v` and the median have strictly opposite, non-zero signs: `v * 0.88`
/// - otherwise, `|v| >= 0.2`: move `v` 0.08 further in its own direction,
///   clamped to `[-1, 1]`
/// - otherwise `v` is left unchanged
///
/// The input vector is not modified.
pub fn propose_amendment(vector: &IssueVector, roster: &[Member]) -> IssueVector {
    let median = median_ideology(roster);
    vector.map_values(|_, v| amend_position(v, median))
}

fn amend_position(v: f64, median: f64) -> f64 {
    let (sv, sm) = (sign(v), sign(median));
    if sv != 0 && sm != 0 && sv != sm {
        v * CONCESSION_FACTOR
    } else if v.abs() >= NUDGE_FLOOR {
        clamp_unit(v + NUDGE_STEP * f64::from(sv))
    } else {
        v
    }
}
