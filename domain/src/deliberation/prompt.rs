//! Prompt template for externally generated speeches

use super::stance::Stance;
use crate::chamber::{IssueVector, Member};

/// Builds the prompt sent to the text-generation service
pub struct SpeechPrompt;

impl SpeechPrompt {
    /// Instructions shared by every speech request
    pub fn preamble() -> &'static str {
        r#"You are a generic elected representative in a simulated legislature.
Do not name or imitate real people, parties, or events.
Write a concise floor argument of at most 90 words."#
    }

    /// Full prompt for one member's speech
    pub fn build(member: &Member, stance: Stance, vector: &IssueVector) -> String {
        let district = member.district();

        let weights = district
            .weights
            .iter()
            .map(|(issue, w)| format!("{}={:.2}", issue, w))
            .collect::<Vec<_>>()
            .join(", ");
        let bill = vector
            .iter()
            .map(|(issue, v)| format!("{}={:+.2}", issue, v))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"{}

District lean (right=-1 to left=+1): {:+.2}
Member ideology (right=-1 to left=+1): {:+.2}
District issue salience: {}
Bill positions (progressive positive): {}
Stance: {}

Argument:"#,
            Self::preamble(),
            district.lean,
            member.ideology(),
            if weights.is_empty() { "none".to_string() } else { weights },
            if bill.is_empty() { "none".to_string() } else { bill },
            stance,
        )
    }
}
