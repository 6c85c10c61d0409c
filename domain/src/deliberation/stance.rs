//! Stance (rhetoric) and vote classification
//!
//! Both classifications read the same utility value but use different
//! deadzones: a speech turns to "amend" within ±0.05, while a vote only
//! abstains within ±0.03. Votes are therefore more decisive than speeches.

use serde::{Deserialize, Serialize};

/// Utility beyond which a speech supports (or opposes) the bill
pub const STANCE_DEADZONE: f64 = 0.05;

/// Utility magnitude below which a member abstains
pub const ABSTAIN_DEADZONE: f64 = 0.03;

/// Rhetorical posture of a speech
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stance {
    Support,
    Oppose,
    Amend,
}

impl Stance {
    pub fn from_utility(utility: f64) -> Self {
        if utility > STANCE_DEADZONE {
            Stance::Support
        } else if utility < -STANCE_DEADZONE {
            Stance::Oppose
        } else {
            Stance::Amend
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stance::Support => "support",
            Stance::Oppose => "oppose",
            Stance::Amend => "amend",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a member votes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Yes,
    No,
    Abstain,
}

impl VoteChoice {
    pub fn from_utility(utility: f64) -> Self {
        if utility.abs() < ABSTAIN_DEADZONE {
            VoteChoice::Abstain
        } else if utility > 0.0 {
            VoteChoice::Yes
        } else {
            VoteChoice::No
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stance_thresholds() {
        assert_eq!(Stance::from_utility(0.051), Stance::Support);
        assert_eq!(Stance::from_utility(0.05), Stance::Amend);
        assert_eq!(Stance::from_utility(-0.05), Stance::Amend);
        assert_eq!(Stance::from_utility(-0.051), Stance::Oppose);
        assert_eq!(Stance::from_utility(0.0), Stance::Amend);
    }

    #[test]
    fn test_vote_thresholds() {
        assert_eq!(VoteChoice::from_utility(0.0), VoteChoice::Abstain);
        assert_eq!(VoteChoice::from_utility(0.029), VoteChoice::Abstain);
        assert_eq!(VoteChoice::from_utility(0.03), VoteChoice::Yes);
        assert_eq!(VoteChoice::from_utility(-0.03), VoteChoice::No);
    }

    #[test]
    fn test_vote_is_more_decisive_than_speech() {
        // inside the speech deadzone but outside the vote deadzone
        let u = 0.04;
        assert_eq!(Stance::from_utility(u), Stance::Amend);
        assert_eq!(VoteChoice::from_utility(u), VoteChoice::Yes);
    }

    #[test]
    fn test_stance_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Stance::Amend).unwrap(), "\"amend\"");
    }
}
