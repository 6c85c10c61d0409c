//! Chamber domain: who sits in the simulated legislature
//!
//! ```text
//! Dataset ──(sample_members)──► Vec<Member>
//!   │                              │
//!   └─ Arc<District> ◄─── shared ──┘
//! ```
//!
//! Districts are immutable inputs; members are derived once per run and hold
//! their district by `Arc`.

pub mod dataset;
pub mod district;
pub mod issue;
pub mod member;
pub mod sampler;
pub mod synthetic;

pub use dataset::{Dataset, DatasetSummary};
pub use district::District;
pub use issue::{Issue, IssueVector};
pub use member::{LEAN_BIAS_KEY, Member, PartyHint, Rationale};
pub use sampler::sample_members;
pub use synthetic::split_districts;
