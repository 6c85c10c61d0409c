//! Progress reporting for simulation runs

use colored::Colorize;
use congress_application::ports::progress::SimulationProgress;
use congress_domain::{Bill, IssueVector, RoundPhase, SimulationResult, Speech, VoteResult};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports progress with a bar for rounds and one for the current round's speeches
pub struct ProgressReporter {
    multi: MultiProgress,
    run_bar: Mutex<Option<ProgressBar>>,
    round_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            run_bar: Mutex::new(None),
            round_bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn round_name(round_index: usize) -> String {
        format!("Round {}", round_index + 1)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationProgress for ProgressReporter {
    fn on_run_start(&self, _bill: &Bill, _members: usize, rounds: usize) {
        let pb = self.multi.add(ProgressBar::new(rounds as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix("Rounds");
        pb.set_message("Sampling chamber...");

        if let Ok(mut slot) = self.run_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_round_start(&self, round_index: usize, speakers: usize) {
        let pb = self.multi.add(ProgressBar::new(speakers as u64));
        pb.set_style(Self::bar_style());
        pb.set_prefix(Self::round_name(round_index));
        pb.set_message("Speeches...");

        if let Ok(mut slot) = self.round_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_speech(&self, _round_index: usize, speech: &Speech) {
        if let Ok(slot) = self.round_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(format!("{} ({})", speech.member_id, speech.stance));
                pb.inc(1);
            }
        }
    }

    fn on_vote(&self, round_index: usize, vote: &VoteResult) {
        if let Ok(mut slot) = self.round_bar.lock() {
            if let Some(pb) = slot.take() {
                let outcome = if vote.passed {
                    "passed".green()
                } else {
                    "failed".red()
                };
                pb.finish_with_message(format!("{} {}", vote.vote_summary(), outcome));
            }
        }
        if let Ok(slot) = self.run_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(format!("{} voted", Self::round_name(round_index)));
                pb.inc(1);
            }
        }
    }

    fn on_amendment(&self, round_index: usize, _amended: &IssueVector) {
        if let Ok(slot) = self.run_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(format!(
                    "{} failed, bill amended",
                    Self::round_name(round_index)
                ));
            }
        }
    }

    fn on_phase(&self, round_index: usize, phase: RoundPhase) {
        if phase != RoundPhase::SelectSpokespeople {
            return;
        }
        if let Ok(slot) = self.run_bar.lock() {
            if let Some(pb) = slot.as_ref() {
                pb.set_message(format!("{}: {}", Self::round_name(round_index), phase));
            }
        }
    }

    fn on_run_complete(&self, result: &SimulationResult) {
        if let Ok(mut slot) = self.run_bar.lock() {
            if let Some(pb) = slot.take() {
                let verdict = if result.final_passed {
                    "PASSED".green()
                } else {
                    "FAILED".red()
                };
                pb.finish_with_message(format!("{}", verdict));
            }
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl SimulationProgress for SimpleProgress {
    fn on_run_start(&self, bill: &Bill, members: usize, rounds: usize) {
        println!(
            "{} {} ({} members, {} rounds)",
            "->".cyan(),
            bill.title.bold(),
            members,
            rounds
        );
    }

    fn on_round_start(&self, round_index: usize, speakers: usize) {
        println!(
            "{} {} ({} speakers)",
            "->".cyan(),
            ProgressReporter::round_name(round_index).bold(),
            speakers
        );
    }

    fn on_speech(&self, _round_index: usize, speech: &Speech) {
        println!("  {} {} ({})", "*".dimmed(), speech.member_id, speech.stance);
    }

    fn on_vote(&self, _round_index: usize, vote: &VoteResult) {
        if vote.passed {
            println!("  {} {}", "v".green(), vote.vote_summary());
        } else {
            println!("  {} {} (failed)", "x".red(), vote.vote_summary());
        }
    }

    fn on_amendment(&self, _round_index: usize, _amended: &IssueVector) {
        println!("  {} bill amended", "~".yellow());
    }

    fn on_run_complete(&self, _result: &SimulationResult) {
        println!();
    }
}
