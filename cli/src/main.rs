//! CLI entrypoint for congress-sim
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use congress_application::{RunSimulationInput, RunSimulationUseCase};
use congress_domain::{Bill, Issue, IssueVector, OutputFormat};
use congress_infrastructure::{
    BillLoader, ConfigLoader, DatasetLoader, FileConfig, OllamaSpeechGenerator,
};
use congress_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, SimpleProgress,
};
use std::sync::Arc;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Bill used when neither --bill nor --issue is given
const DEMO_TITLE: &str = "Clean Energy Incentives Act";
const DEMO_SUMMARY: &str = "Tax credits for renewable energy and grid upgrades.";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting congress-sim");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    let config = merge_cli(file_config, &cli);
    config.validate()?;

    congress_presentation::output::set_color(config.output.colors_enabled());
    let format = config.output.resolved_format();
    let params = config.to_simulation_params();
    params.validate()?;

    // === Inputs ===
    let dataset = DatasetLoader::load(config.dataset.path.as_deref())?;
    let dataset = DatasetLoader::synthesize(
        &dataset,
        config.dataset.multiplier,
        config.dataset.jitter,
        params.seed,
    )?;
    let bill = resolve_bill(&cli)?;

    // === Dependency Injection ===
    let generator = Arc::new(OllamaSpeechGenerator::new(
        config.generation.base_url.clone(),
        config.generation.timeout(),
    )?);
    let use_case = RunSimulationUseCase::new(generator);

    if !cli.quiet && format != OutputFormat::Json {
        println!();
        println!("{}", ConsoleFormatter::format_dataset(&dataset.summary()));
        println!("Generation: {}", params.generation.describe());
        println!();
    }

    let input = RunSimulationInput::new(dataset, bill).with_params(params);
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else if cli.plain {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    };

    println!("{}", ConsoleFormatter.render(&result, format));

    Ok(())
}

/// Install the tracing subscriber; the returned guard flushes the log file on drop
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

/// Apply command-line overrides on top of the file configuration
fn merge_cli(mut config: FileConfig, cli: &Cli) -> FileConfig {
    let sim = &mut config.simulation;
    if let Some(members) = cli.members {
        sim.members = members;
    }
    if let Some(rounds) = cli.rounds {
        sim.rounds = rounds;
    }
    if let Some(threshold) = cli.threshold {
        sim.threshold = threshold;
    }
    if let Some(cap) = cli.spokespeople {
        sim.spokespeople = cap;
    }
    if cli.seed.is_some() {
        sim.seed = cli.seed;
    }

    let generation = &mut config.generation;
    if cli.llm {
        generation.enabled = true;
    }
    if let Some(model) = &cli.model {
        generation.model = model.clone();
    }
    if let Some(url) = &cli.ollama_url {
        generation.base_url = url.clone();
    }
    if let Some(secs) = cli.timeout {
        generation.timeout_seconds = secs;
    }

    let dataset = &mut config.dataset;
    if cli.dataset.is_some() {
        dataset.path = cli.dataset.clone();
    }
    if let Some(multiplier) = cli.multiplier {
        dataset.multiplier = multiplier;
    }
    if let Some(jitter) = cli.jitter {
        dataset.jitter = jitter;
    }

    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if cli.no_color {
        config.output.color = false;
    }

    config
}

/// Bill from --bill, from --issue pairs, or the demo bill
fn resolve_bill(cli: &Cli) -> Result<Bill> {
    if let Some(path) = &cli.bill {
        return Ok(BillLoader::from_path(path)?);
    }

    if cli.issue.is_empty() {
        let vector = IssueVector::new()
            .with(Issue::Climate, 0.7)
            .with(Issue::Economy, 0.3);
        return Ok(Bill::new(DEMO_TITLE, vector).with_summary(DEMO_SUMMARY));
    }

    let title = cli.title.clone().unwrap_or_else(|| "Untitled Bill".to_string());
    let mut bill = Bill::new(title, cli.issue_vector());
    if let Some(summary) = &cli.summary {
        bill = bill.with_summary(summary.clone());
    }
    Ok(bill)
}
