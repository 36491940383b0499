//! bracket CLI - Command-line interface for the bracket engine
//!
//! Loads a seeded team list and a pairwise probability CSV, then prints the
//! most likely bracket, each team's title probability, and optionally
//! Monte-Carlo title frequencies.
//!
//! ```bash
//! bracket --teams teams.txt --probs probs.csv
//! bracket --teams teams.txt --probs probs.csv --simulations 100000 --format json
//! ```

use anyhow::{Context, Result};
use bracket_engine::{Bracket, Team};
use bracket_loader::{load_probabilities, load_teams, CsvOptions};
use clap::Parser;
use std::collections::HashSet;
use tracing::{info, warn};

mod config;
mod report;

use config::{Config, OutputFormat};
use report::Report;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::parse();
    config.validate()?;

    let report = run(&config)?;
    match config.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run(config: &Config) -> Result<Report> {
    let teams = load_teams(&config.teams)
        .with_context(|| format!("loading team list {}", config.teams.display()))?;
    let table = load_probabilities(
        &config.probs,
        CsvOptions {
            has_headers: config.csv_header,
        },
    )
    .with_context(|| format!("loading probabilities {}", config.probs.display()))?;
    info!(teams = teams.len(), entries = table.len(), "inputs loaded");

    let listed: HashSet<&Team> = teams.iter().collect();
    for team in table.teams().filter(|t| !listed.contains(t)) {
        warn!(team = %team, "probability table names a team that is not in the bracket");
    }

    let missing = table.missing_pairs(&teams);
    if let Some((a, b)) = missing.first() {
        if config.strict {
            anyhow::bail!(
                "{} team pairs have no probability (first: {} vs {})",
                missing.len(),
                a,
                b
            );
        }
        info!(pairs = missing.len(), "unspecified pairs default to 0.5");
    }

    let bracket = Bracket::new(teams, table).context("cannot build bracket")?;
    info!(teams = bracket.size(), rounds = bracket.rounds(), "analyzing bracket");
    let analysis = bracket.analyze();

    let simulation = if config.simulations > 0 {
        let summary = bracket.simulate(config.simulations, config.seed)?;
        info!(runs = summary.runs, seed = summary.seed, "simulation finished");
        Some(summary)
    } else {
        None
    };

    Ok(Report::build(
        bracket.size(),
        missing.len(),
        analysis,
        simulation,
        config.top,
    ))
}
