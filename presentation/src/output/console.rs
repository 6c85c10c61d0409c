//! Console output formatter for simulation results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use congress_domain::core::string::truncate;
use congress_domain::{
    DatasetSummary, IssueVector, RoundResult, SimulationResult, Stance, VoteResult,
};

/// Speech preview length in summary output
const PREVIEW_LEN: usize = 96;

/// Formats simulation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete run: every round, speech and roll call
    pub fn format_full(result: &SimulationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Chamber Simulation"));
        output.push('\n');
        output.push_str(&Self::bill_block(result));

        for round in &result.rounds {
            output.push_str(&Self::section_header(&format!(
                "Round {}",
                round.round_index + 1
            )));
            output.push_str(&format!(
                "{} {}\n",
                "Bill:".cyan().bold(),
                Self::vector_line(&round.issue_vector)
            ));

            for speech in &round.speeches {
                output.push_str(&format!(
                    "\n{} {}\n{}\n",
                    format!("── {} ──", speech.member_id).yellow().bold(),
                    Self::stance_label(speech.stance),
                    Self::indent(&speech.text, "  ")
                ));
                let rationale = speech
                    .rationale
                    .iter()
                    .map(|(k, v)| format!("{}={:+.3}", k, v))
                    .collect::<Vec<_>>()
                    .join(", ");
                output.push_str(&format!("  {}\n", rationale.dimmed()));
            }

            output.push_str(&format!("\n{} {}\n", "Vote:".cyan().bold(), Self::vote_line(&round.vote)));
        }

        output.push_str(&Self::verdict_block(result));
        output.push_str(&Self::footer());
        output
    }

    /// Format the roll call of each round and the verdict
    pub fn format_summary(result: &SimulationResult) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "{}\n\n",
            "=== Chamber Verdict ===".cyan().bold()
        ));
        output.push_str(&Self::bill_block(result));

        for round in &result.rounds {
            output.push_str(&Self::round_summary(round));
        }

        output.push_str(&Self::verdict_block(result));
        output
    }

    /// Format as JSON
    pub fn format_json(result: &SimulationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-paragraph description of the loaded dataset
    pub fn format_dataset(summary: &DatasetSummary) -> String {
        format!(
            "{} {} ({} districts, population {}, mean lean {:+.2})",
            "Dataset:".cyan().bold(),
            summary.source,
            summary.count,
            summary.total_population,
            summary.mean_lean
        )
    }

    fn bill_block(result: &SimulationResult) -> String {
        let mut output = format!("{} {}\n", "Bill:".cyan().bold(), result.bill.title);
        if !result.bill.summary.is_empty() {
            output.push_str(&format!("  {}\n", result.bill.summary.dimmed()));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Positions:".cyan().bold(),
            Self::vector_line(&result.bill.issue_vector)
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Members:".cyan().bold(),
            result.members
        ));
        output
    }

    fn round_summary(round: &RoundResult) -> String {
        let mut output = format!(
            "\n{} {}  [{} support / {} oppose / {} amend]\n",
            format!("Round {}:", round.round_index + 1).bold(),
            Self::vote_line(&round.vote),
            round.stance_count(Stance::Support),
            round.stance_count(Stance::Oppose),
            round.stance_count(Stance::Amend),
        );
        if let Some(speech) = round.speeches.first() {
            output.push_str(&format!(
                "  {} {}\n",
                format!("{}:", speech.member_id).dimmed(),
                truncate(&speech.text, PREVIEW_LEN)
            ));
        }
        output
    }

    fn verdict_block(result: &SimulationResult) -> String {
        let verdict = if result.final_passed {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };
        let mut output = format!("\n{} {}", "Final verdict:".cyan().bold(), verdict);
        let amendments = result.amendments();
        if amendments > 0 {
            output.push_str(&format!(
                " after {} amendment{}",
                amendments,
                if amendments == 1 { "" } else { "s" }
            ));
        }
        output.push('\n');
        for note in &result.notes {
            output.push_str(&format!("  {}\n", note.dimmed()));
        }
        output
    }

    fn vote_line(vote: &VoteResult) -> String {
        let outcome = if vote.passed {
            "passed".green()
        } else {
            "failed".red()
        };
        format!(
            "{} ({:.0}% of decisive votes, needs {:.0}%) {}",
            vote.vote_summary(),
            vote.approval_ratio() * 100.0,
            vote.threshold * 100.0,
            outcome
        )
    }

    fn vector_line(vector: &IssueVector) -> String {
        if vector.is_empty() {
            return "none".to_string();
        }
        vector
            .iter()
            .map(|(issue, v)| format!("{}={:+.2}", issue, v))
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn stance_label(stance: Stance) -> ColoredString {
        match stance {
            Stance::Support => "support".green(),
            Stance::Oppose => "oppose".red(),
            Stance::Amend => "amend".yellow(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_full(&self, result: &SimulationResult) -> String {
        Self::format_full(result)
    }

    fn format_summary(&self, result: &SimulationResult) -> String {
        Self::format_summary(result)
    }

    fn format_json(&self, result: &SimulationResult) -> String {
        Self::format_json(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use congress_domain::{Bill, Issue, OutputFormat, Rationale, Speech};

    fn sample_result() -> SimulationResult {
        let vector = IssueVector::new().with(Issue::Climate, 0.7);
        let amended = IssueVector::new().with(Issue::Climate, 0.616);
        let mut rationale = Rationale::new();
        rationale.insert("climate".to_string(), 0.12);

        let first = RoundResult::new(
            0,
            vector.clone(),
            vec![Speech::new(
                "M-0001",
                Stance::Support,
                "I rise in support of the grid.",
                rationale,
            )],
            VoteResult::from_counts(40, 55, 5, 0.5),
        )
        .with_amendment(true);
        let second = RoundResult::new(1, amended, vec![], VoteResult::from_counts(60, 35, 5, 0.5));

        SimulationResult::new(100, Bill::new("Grid Act", vector), vec![first, second])
            .with_note("seed: 42")
    }

    #[test]
    fn test_summary_lists_rounds_and_verdict() {
        let text = ConsoleFormatter::format_summary(&sample_result());
        assert!(text.contains("Grid Act"));
        assert!(text.contains("40-55 (5 abstain)"));
        assert!(text.contains("60-35 (5 abstain)"));
        assert!(text.contains("PASSED"));
        assert!(text.contains("1 amendment"));
        assert!(text.contains("seed: 42"));
    }

    #[test]
    fn test_full_includes_speeches() {
        let text = ConsoleFormatter::format_full(&sample_result());
        assert!(text.contains("M-0001"));
        assert!(text.contains("I rise in support of the grid."));
        assert!(text.contains("climate=+0.120"));
        assert!(text.contains("climate=+0.62"));
    }

    #[test]
    fn test_json_roundtrips_verdict() {
        let json = ConsoleFormatter::format_json(&sample_result());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["final_passed"], serde_json::Value::Bool(true));
        assert_eq!(value["rounds"].as_array().unwrap().len(), 2);
        assert_eq!(value["rounds"][0]["speeches"][0]["stance"], "support");
    }

    #[test]
    fn test_render_dispatches() {
        let result = sample_result();
        let json = ConsoleFormatter.render(&result, OutputFormat::Json);
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_empty_vector_line() {
        assert_eq!(ConsoleFormatter::vector_line(&IssueVector::new()), "none");
    }
}
