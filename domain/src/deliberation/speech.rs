//! Speeches and the template speech writer

use super::stance::Stance;
use crate::chamber::{IssueVector, Member, Rationale};
use serde::{Deserialize, Serialize};

/// Bill positions weaker than this are not described as a direction
pub const DIRECTION_THRESHOLD: f64 = 0.15;

/// A spokesperson's statement in one round
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speech {
    pub member_id: String,
    pub stance: Stance,
    pub text: String,
    /// Utility contribution by issue, plus `district_lean_bias`
    pub rationale: Rationale,
}

impl Speech {
    pub fn new(
        member_id: impl Into<String>,
        stance: Stance,
        text: impl Into<String>,
        rationale: Rationale,
    ) -> Self {
        Self {
            member_id: member_id.into(),
            stance,
            text: text.into(),
            rationale,
        }
    }
}

/// Write a short, fixed-structure speech without any external service
///
/// Mentions the member's two most salient issues when the bill moves them by
/// more than [`DIRECTION_THRESHOLD`], and the district's lean. The output is
/// never empty.
pub fn template_speech(member: &Member, stance: Stance, vector: &IssueVector) -> String {
    let district = member.district();
    let lean = district.lean_descriptor();

    let directions: Vec<String> = district
        .top_issues(2)
        .into_iter()
        .filter_map(|issue| {
            let v = vector.get(issue);
            if v.abs() <= DIRECTION_THRESHOLD {
                return None;
            }
            let verb = if v > 0.0 { "expands" } else { "restricts" };
            Some(format!("{} {} policy", issue, verb))
        })
        .collect();
    let direction_clause = if directions.is_empty() {
        "the bill is mixed across the issues we care about".to_string()
    } else {
        format!("on our priorities the bill {}", join_directions(&directions))
    };

    match stance {
        Stance::Support => format!(
            "I rise in support. My district is {}, and {}. Taken together, it moves us toward what my constituents ask for.",
            lean, direction_clause
        ),
        Stance::Oppose => format!(
            "I rise in opposition. My district is {}, and {}. Taken together, the costs to my constituents outweigh what it delivers.",
            lean, direction_clause
        ),
        Stance::Amend => format!(
            "I cannot vote for this as written. My district is {}; keep what works, soften what does not, and bring the bill closer to the middle of this chamber.",
            lean
        ),
    }
}

fn join_directions(directions: &[String]) -> String {
    match directions {
        [one] => one.clone(),
        [first, rest @ ..] => format!("{} and {}", first, rest.join(" and ")),
        [] => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chamber::{District, Issue};
    use std::sync::Arc;

    fn member(lean: f64) -> Member {
        let district = District::new("d", "D")
            .with_lean(lean)
            .with_weight(Issue::Economy, 0.5)
            .with_weight(Issue::Climate, 0.3)
            .with_weight(Issue::Education, 0.2);
        Member::new("M-0001", Arc::new(district), lean)
    }

    #[test]
    fn test_support_mentions_directions() {
        let v = IssueVector::new()
            .with(Issue::Economy, 0.6)
            .with(Issue::Climate, -0.4)
            .with(Issue::Education, 0.9);
        let text = template_speech(&member(0.5), Stance::Support, &v);

        assert!(text.starts_with("I rise in support."));
        assert!(text.contains("left-leaning"));
        assert!(text.contains("economy expands policy"));
        assert!(text.contains("climate restricts policy"));
        // education is not a top-2 issue
        assert!(!text.contains("education"));
    }

    #[test]
    fn test_weak_positions_are_skipped() {
        let v = IssueVector::new()
            .with(Issue::Economy, 0.15)
            .with(Issue::Climate, 0.1);
        let text = template_speech(&member(-0.5), Stance::Oppose, &v);

        assert!(text.starts_with("I rise in opposition."));
        assert!(text.contains("right-leaning"));
        assert!(text.contains("mixed across the issues"));
    }

    #[test]
    fn test_amend_wording() {
        let text = template_speech(&member(0.0), Stance::Amend, &IssueVector::new());
        assert!(text.contains("mixed"));
        assert!(text.contains("closer to the middle"));
    }

    #[test]
    fn test_never_empty_without_weights() {
        let m = Member::new("M-0002", Arc::new(District::new("e", "E")), 0.2);
        for stance in [Stance::Support, Stance::Oppose, Stance::Amend] {
            assert!(!template_speech(&m, stance, &IssueVector::new()).is_empty());
        }
    }
}
