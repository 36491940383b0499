use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Upper bound on Monte-Carlo runs accepted from the command line
const MAX_SIMULATIONS: usize = 100_000_000;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Analyze a single-elimination bracket from pairwise win probabilities
#[derive(Parser, Debug, Clone)]
#[command(name = "bracket", version, about)]
pub struct Config {
    /// Newline-separated team list, in seed order (power of two)
    #[arg(long, env = "BRACKET_TEAMS")]
    pub teams: PathBuf,

    /// CSV of pairwise probabilities: team_a,team_b,probability_a_wins
    #[arg(long, env = "BRACKET_PROBS")]
    pub probs: PathBuf,

    /// Skip the first CSV row as a header
    #[arg(long, env = "BRACKET_CSV_HEADER", default_value = "false")]
    pub csv_header: bool,

    /// Reject probability tables that leave any pair of teams unspecified
    #[arg(long, env = "BRACKET_STRICT", default_value = "false")]
    pub strict: bool,

    /// Number of Monte-Carlo brackets to simulate (0 = skip)
    #[arg(long, env = "BRACKET_SIMULATIONS", default_value = "0")]
    pub simulations: usize,

    /// Seed for the Monte-Carlo simulation
    #[arg(long, env = "BRACKET_SEED", default_value = "42")]
    pub seed: u64,

    /// Report format
    #[arg(long, value_enum, env = "BRACKET_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Only list the N most likely champions
    #[arg(long, env = "BRACKET_TOP")]
    pub top: Option<usize>,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.simulations > MAX_SIMULATIONS {
            anyhow::bail!("simulations must be at most {}", MAX_SIMULATIONS);
        }
        if self.top == Some(0) {
            anyhow::bail!("top must be at least 1");
        }
        Ok(())
    }
}
