//! Domain layer for congress-sim
//!
//! This crate contains the core simulation logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns and
//! performs no I/O; randomness is always supplied by the caller.
//!
//! # Core Concepts
//!
//! ## Chamber
//!
//! - **District**: immutable constituency input (lean, population, issue weights)
//! - **Member**: legislator sampled from a district, population-weighted
//!
//! ## Deliberation
//!
//! - **Stance**: rhetorical posture of a speech (support / oppose / amend)
//! - **Spokespeople**: the bounded set of members who speak each round
//!
//! ## Quorum
//!
//! - **Tally**: every member votes; abstentions do not count toward passage
//! - **Amendment**: the bill drifts toward the chamber median after a failure

pub mod chamber;
pub mod config;
pub mod core;
pub mod deliberation;
pub mod orchestration;
pub mod quorum;
pub mod util;

// Re-export commonly used types
pub use chamber::{
    Dataset, DatasetSummary, District, Issue, IssueVector, Member, PartyHint, Rationale,
    sample_members, split_districts,
};
pub use config::OutputFormat;
pub use crate::core::error::DomainError;
pub use deliberation::{
    DEFAULT_SPOKESPEOPLE, Speech, SpeechPrompt, Stance, VoteChoice, select_spokespeople,
    template_speech,
};
pub use orchestration::{Bill, RoundPhase, RoundResult, SimulationResult};
pub use quorum::{DEFAULT_THRESHOLD, VoteResult, median_ideology, propose_amendment, tally};
