//! Run Simulation use case
//!
//! Orchestrates the full deliberation-and-vote loop: sample a roster once,
//! then for each round select spokespeople, produce their speeches, tally
//! the whole chamber and amend the bill if the vote failed and rounds remain.

use crate::config::{GenerationMode, SimulationParams};
use crate::ports::progress::{NoProgress, SimulationProgress};
use crate::ports::speech_generator::{
    GenerationError, GenerationOutcome, GenerationRequest, SpeechGenerator,
};
use congress_domain::{
    Bill, Dataset, DomainError, IssueVector, Member, RoundPhase, RoundResult, SimulationResult,
    Speech, SpeechPrompt, Stance, propose_amendment, sample_members, select_spokespeople, tally,
    template_speech,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a simulation run
///
/// A run either completes or fails before producing any result; speech
/// generation failures never show up here.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunSimulationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl RunSimulationError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, RunSimulationError::Domain(e) if e.is_invalid_input())
    }
}

/// Input for the RunSimulation use case
#[derive(Debug, Clone)]
pub struct RunSimulationInput {
    pub dataset: Dataset,
    pub bill: Bill,
    pub params: SimulationParams,
}

impl RunSimulationInput {
    pub fn new(dataset: Dataset, bill: Bill) -> Self {
        Self {
            dataset,
            bill,
            params: SimulationParams::default(),
        }
    }

    pub fn with_params(mut self, params: SimulationParams) -> Self {
        self.params = params;
        self
    }
}

/// Use case for running a legislative simulation
pub struct RunSimulationUseCase<G: SpeechGenerator + 'static> {
    generator: Arc<G>,
}

impl<G: SpeechGenerator + 'static> RunSimulationUseCase<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self { generator }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunSimulationInput,
    ) -> Result<SimulationResult, RunSimulationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunSimulationInput,
        progress: &dyn SimulationProgress,
    ) -> Result<SimulationResult, RunSimulationError> {
        let RunSimulationInput {
            dataset,
            bill,
            params,
        } = input;

        // Phase: Init
        progress.on_phase(0, RoundPhase::Init);
        if dataset.is_empty() {
            return Err(DomainError::InvalidInput(
                "No districts are loaded; load a dataset before running".to_string(),
            )
            .into());
        }
        params.validate()?;

        let mut rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        // The roster is sampled first so a seed fixes it independently of
        // how many speakers are drawn later.
        let roster = sample_members(dataset.districts(), params.members, &mut rng)?;

        info!(
            "Starting simulation of '{}' with {} members over {} round(s) from {}",
            bill.title,
            roster.len(),
            params.rounds,
            dataset.source()
        );
        debug!("Generation mode: {}", params.generation.describe());
        progress.on_run_start(&bill, roster.len(), params.rounds);

        let mut vector = bill.issue_vector.clone();
        let mut rounds = Vec::with_capacity(params.rounds);

        for round_index in 0..params.rounds {
            // Phase: SelectSpokespeople
            progress.on_phase(round_index, RoundPhase::SelectSpokespeople);
            let speakers = select_spokespeople(&roster, params.spokespeople, &mut rng);
            info!(
                "Round {}: {} spokespeople selected",
                round_index + 1,
                speakers.len()
            );
            progress.on_round_start(round_index, speakers.len());

            // Phase: GenerateSpeeches
            progress.on_phase(round_index, RoundPhase::GenerateSpeeches);
            let mut speeches = Vec::with_capacity(speakers.len());
            for member in speakers {
                let speech = self.deliver_speech(member, &vector, &params.generation).await;
                progress.on_speech(round_index, &speech);
                speeches.push(speech);
            }

            // Phase: Tally
            progress.on_phase(round_index, RoundPhase::Tally);
            let vote = tally(&roster, &vector, params.threshold);
            info!(
                "Round {} vote: {} ({})",
                round_index + 1,
                vote.vote_summary(),
                if vote.passed { "passed" } else { "failed" }
            );
            progress.on_vote(round_index, &vote);

            // Phase: Branch
            progress.on_phase(round_index, RoundPhase::Branch);
            let is_last = round_index + 1 == params.rounds;
            let next = if !vote.passed && !is_last {
                let amended = propose_amendment(&vector, &roster);
                debug!("Round {} amended bill: {:?}", round_index + 1, amended);
                progress.on_amendment(round_index, &amended);
                Some(amended)
            } else {
                None
            };

            rounds.push(
                RoundResult::new(round_index, vector.clone(), speeches, vote)
                    .with_amendment(next.is_some()),
            );
            if let Some(amended) = next {
                vector = amended;
            }
        }

        // Phase: Finalize
        progress.on_phase(params.rounds.saturating_sub(1), RoundPhase::Finalize);
        let mut result = SimulationResult::new(roster.len(), bill, rounds)
            .with_note(format!("dataset: {}", dataset.source()))
            .with_note(format!("generation: {}", params.generation.describe()));
        if let Some(seed) = params.seed {
            result = result.with_note(format!("seed: {}", seed));
        }

        info!(
            "Simulation finished: {}",
            if result.final_passed { "PASSED" } else { "FAILED" }
        );
        progress.on_run_complete(&result);

        Ok(result)
    }

    /// Produce one spokesperson's speech against the current bill
    async fn deliver_speech(
        &self,
        member: &Member,
        vector: &IssueVector,
        generation: &GenerationMode,
    ) -> Speech {
        let stance = Stance::from_utility(member.utility(vector));
        let rationale = member.utility_by_issue(vector);

        let text = match generation {
            GenerationMode::Template => template_speech(member, stance, vector),
            GenerationMode::External { model, timeout } => {
                let request =
                    GenerationRequest::new(model.clone(), SpeechPrompt::build(member, stance, vector));
                let result = tokio::time::timeout(*timeout, self.generator.generate(&request))
                    .await
                    .unwrap_or(Err(GenerationError::Timeout));

                match GenerationOutcome::from_result(result) {
                    GenerationOutcome::Text(text) => text,
                    GenerationOutcome::Unavailable(e) => {
                        warn!(
                            "Speech generation for {} unavailable, using template: {}",
                            member.id(),
                            e
                        );
                        template_speech(member, stance, vector)
                    }
                }
            }
        };

        Speech::new(member.id(), stance, text, rationale)
    }
}
