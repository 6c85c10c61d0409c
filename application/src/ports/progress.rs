//! Progress notification port
//!
//! Defines the interface for reporting progress during a simulation run.

use congress_domain::{Bill, IssueVector, RoundPhase, SimulationResult, Speech, VoteResult};

/// Callback for progress updates during a simulation run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain log lines, etc.)
pub trait SimulationProgress: Send + Sync {
    /// Called once the roster has been sampled
    fn on_run_start(&self, bill: &Bill, members: usize, rounds: usize);

    /// Called when a round starts
    fn on_round_start(&self, round_index: usize, speakers: usize);

    /// Called after each speech is produced
    fn on_speech(&self, round_index: usize, speech: &Speech);

    /// Called after the vote of a round
    fn on_vote(&self, round_index: usize, vote: &VoteResult);

    /// Called when a failed round produces an amended bill
    fn on_amendment(&self, _round_index: usize, _amended: &IssueVector) {}

    /// Called when the loop moves to another phase
    fn on_phase(&self, _round_index: usize, _phase: RoundPhase) {}

    /// Called when the whole run finishes
    fn on_run_complete(&self, _result: &SimulationResult) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl SimulationProgress for NoProgress {
    fn on_run_start(&self, _bill: &Bill, _members: usize, _rounds: usize) {}
    fn on_round_start(&self, _round_index: usize, _speakers: usize) {}
    fn on_speech(&self, _round_index: usize, _speech: &Speech) {}
    fn on_vote(&self, _round_index: usize, _vote: &VoteResult) {}
}
