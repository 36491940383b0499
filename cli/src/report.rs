//! Report assembly and rendering

use bracket_engine::{Analysis, Match, SimulationSummary, Team, TeamProbability};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize)]
pub struct SimulationReport {
    pub runs: usize,
    pub seed: u64,
    /// Title frequencies, most frequent first
    pub champions: Vec<TeamProbability>,
}

#[derive(Debug, Serialize)]
pub struct Report {
    pub teams: usize,
    /// Team pairs with no entry in the probability table (played at 0.5)
    pub unspecified_pairs: usize,
    pub champion: Team,
    pub champion_probability: f64,
    /// Exact title probabilities, most likely first
    pub win_probabilities: Vec<TeamProbability>,
    /// Most likely bracket, first round first within each sub-bracket
    pub matches: Vec<Match>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation: Option<SimulationReport>,
}

fn truncate(mut entries: Vec<TeamProbability>, top: Option<usize>) -> Vec<TeamProbability> {
    if let Some(n) = top {
        entries.truncate(n);
    }
    entries
}

impl Report {
    pub fn build(
        teams: usize,
        unspecified_pairs: usize,
        analysis: Analysis,
        simulation: Option<SimulationSummary>,
        top: Option<usize>,
    ) -> Self {
        let matches = analysis.most_likely.matches();
        let simulation = simulation.map(|summary| SimulationReport {
            runs: summary.runs,
            seed: summary.seed,
            champions: truncate(summary.to_distribution().sorted(), top),
        });
        Report {
            teams,
            unspecified_pairs,
            champion: analysis.most_likely.champion,
            champion_probability: analysis.most_likely.probability,
            win_probabilities: truncate(analysis.marginals.sorted(), top),
            matches,
            simulation,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Most likely champion: {} (p={:.4})",
            self.champion, self.champion_probability
        )?;
        writeln!(f, "Probability each team wins:")?;
        for entry in &self.win_probabilities {
            writeln!(f, "  {}: {:.4}", entry.team, entry.probability)?;
        }

        writeln!(f, "\nPredicted match results:")?;
        for m in &self.matches {
            writeln!(f, "Round {}: {} vs {} -> {}", m.round, m.left, m.right, m.winner)?;
        }

        if let Some(sim) = &self.simulation {
            writeln!(
                f,
                "\nSimulated champions ({} brackets, seed {}):",
                sim.runs, sim.seed
            )?;
            for entry in &sim.champions {
                writeln!(f, "  {}: {:.4}", entry.team, entry.probability)?;
            }
        }
        Ok(())
    }
}
