//! CLI command definitions

use clap::{Parser, ValueEnum};
use congress_domain::{Issue, IssueVector};
use std::path::PathBuf;

/// Output format for simulation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every round with all speeches
    Full,
    /// Roll call per round and the final verdict
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for congress_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => congress_domain::OutputFormat::Full,
            OutputFormat::Summary => congress_domain::OutputFormat::Summary,
            OutputFormat::Json => congress_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for congress-sim
#[derive(Parser, Debug)]
#[command(name = "congress-sim")]
#[command(author, version, about = "Simulated legislature - members debate and vote on a bill")]
#[command(long_about = r#"
congress-sim samples a chamber of members from district data, then runs
rounds of debate and voting on a bill. Each round a handful of spokespeople
speak, the whole chamber votes, and a failed bill is amended toward the
chamber median before the next round. The last round decides.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./congress.toml     Project-level config
3. ~/.config/congress-sim/config.toml   Global config

Example:
  congress-sim --issue climate=0.7 --issue economy=0.3
  congress-sim --bill bill.json --members 400 --rounds 5 --seed 42 -o full
  congress-sim --dataset districts.json --multiplier 3 --llm --model llama3.1:8b
"#)]
pub struct Cli {
    /// Bill title (used with --issue)
    #[arg(short, long, value_name = "TITLE", conflicts_with = "bill")]
    pub title: Option<String>,

    /// Bill summary (used with --issue)
    #[arg(long, value_name = "TEXT", conflicts_with = "bill")]
    pub summary: Option<String>,

    /// Bill position on an issue, e.g. economy=0.6 (can be specified multiple times)
    #[arg(short, long, value_name = "ISSUE=VALUE", value_parser = IssueVector::parse_pair)]
    pub issue: Vec<(Issue, f64)>,

    /// Read the bill from a JSON file instead of --issue
    #[arg(short, long, value_name = "PATH", conflicts_with = "issue")]
    pub bill: Option<PathBuf>,

    /// District JSON file (the built-in mock chamber when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub dataset: Option<PathBuf>,

    /// Split every district into this many synthetic sub-districts
    #[arg(long, value_name = "N")]
    pub multiplier: Option<usize>,

    /// Noise applied when splitting districts (0-1)
    #[arg(long, value_name = "X")]
    pub jitter: Option<f64>,

    /// Number of members to sample (10-1000)
    #[arg(short = 'n', long, value_name = "N")]
    pub members: Option<usize>,

    /// Number of debate/vote rounds (1-10)
    #[arg(short, long, value_name = "N")]
    pub rounds: Option<usize>,

    /// Share of decisive votes needed to pass (0-1)
    #[arg(long, value_name = "X")]
    pub threshold: Option<f64>,

    /// Maximum speakers per round
    #[arg(long, value_name = "N")]
    pub spokespeople: Option<usize>,

    /// Seed for a reproducible run
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Ask an Ollama server for speeches (falls back to templates)
    #[arg(long)]
    pub llm: bool,

    /// Model used with --llm
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Ollama base URL
    #[arg(long, value_name = "URL")]
    pub ollama_url: Option<String>,

    /// Seconds allowed for each generated speech
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Print progress as plain lines instead of progress bars
    #[arg(long, conflicts_with = "quiet")]
    pub plain: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Issue vector assembled from `--issue` pairs; later pairs win
    pub fn issue_vector(&self) -> IssueVector {
        self.issue.iter().copied().collect()
    }
}
