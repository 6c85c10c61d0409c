//! Quorum domain: roll calls and what happens after one fails
//!
//! ```text
//!   IssueVector(r) ──tally──► VoteResult(r)
//!        │                        │ failed && r < last
//!        └──propose_amendment◄────┘
//!                 │
//!                 ▼
//!           IssueVector(r+1)
//! ```

pub mod amendment;
pub mod vote;

pub use amendment::{median_ideology, propose_amendment};
pub use vote::{DEFAULT_THRESHOLD, VoteResult, tally};
