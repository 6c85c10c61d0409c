//! Deliberation domain: who speaks, in what posture, with what words

pub mod prompt;
pub mod speech;
pub mod spokespeople;
pub mod stance;

pub use prompt::SpeechPrompt;
pub use speech::{Speech, template_speech};
pub use spokespeople::{DEFAULT_SPOKESPEOPLE, select_spokespeople};
pub use stance::{Stance, VoteChoice};
