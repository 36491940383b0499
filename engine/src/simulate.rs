//! Monte-Carlo bracket simulation
//!
//! Each game is decided by one uniform draw against P(left beats right).
//! Runs are split into fixed-size chunks; chunk `k` draws from an RNG seeded
//! with `seed + k`, so the summary depends only on `(runs, seed)` and not on
//! how Rayon schedules the chunks.

use crate::bracket::Bracket;
use crate::distribution::Distribution;
use crate::error::SimulationError;
use crate::node::MatchTree;
use crate::probability::ProbabilityTable;
use crate::team::Team;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Runs per independently seeded chunk
const CHUNK_RUNS: usize = 4096;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionCount {
    pub team: Team,
    pub titles: usize,
}

/// Title counts over many simulated brackets, in seed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimulationSummary {
    pub runs: usize,
    pub seed: u64,
    pub champions: Vec<ChampionCount>,
}

impl SimulationSummary {
    /// Share of runs won by `team`
    pub fn frequency(&self, team: &str) -> Option<f64> {
        self.champions
            .iter()
            .find(|c| c.team.name() == team)
            .map(|c| c.titles as f64 / self.runs as f64)
    }

    /// Title frequencies as a distribution (sums to 1)
    pub fn to_distribution(&self) -> Distribution {
        let teams: Vec<Team> = self.champions.iter().map(|c| c.team.clone()).collect();
        let freqs = self
            .champions
            .iter()
            .map(|c| c.titles as f64 / self.runs as f64)
            .collect();
        Distribution::from_parts(&teams, freqs)
    }
}

/// Play `teams` once and return the full outcome tree
fn play<R: Rng + ?Sized>(teams: &[Team], table: &ProbabilityTable, rng: &mut R) -> Arc<MatchTree> {
    if let [team] = teams {
        return Arc::new(MatchTree::leaf(team.clone()));
    }
    let (lo, hi) = teams.split_at(teams.len() / 2);
    let left = play(lo, table, rng);
    let right = play(hi, table, rng);
    let p_left = table.win_probability(left.winner().name(), right.winner().name());
    let winner = if rng.gen::<f64>() < p_left {
        left.winner().clone()
    } else {
        right.winner().clone()
    };
    Arc::new(MatchTree::played(winner, left, right))
}

/// Play `teams` once and return the champion's index into `teams`
fn play_champion<R: Rng + ?Sized>(teams: &[Team], table: &ProbabilityTable, rng: &mut R) -> usize {
    if teams.len() == 1 {
        return 0;
    }
    let half = teams.len() / 2;
    let (lo, hi) = teams.split_at(half);
    let left = play_champion(lo, table, rng);
    let right = half + play_champion(hi, table, rng);
    let p_left = table.win_probability(teams[left].name(), teams[right].name());
    if rng.gen::<f64>() < p_left {
        left
    } else {
        right
    }
}

impl Bracket {
    /// Draw one random bracket from the pairwise probabilities
    pub fn simulate_once<R: Rng + ?Sized>(&self, rng: &mut R) -> MatchTree {
        let tree = play(self.teams(), self.table(), rng);
        Arc::unwrap_or_clone(tree)
    }

    /// Simulate `runs` brackets and count titles per team
    pub fn simulate(&self, runs: usize, seed: u64) -> Result<SimulationSummary, SimulationError> {
        if runs == 0 {
            return Err(SimulationError::NoRuns);
        }
        let teams = self.teams();
        let chunks = runs.div_ceil(CHUNK_RUNS);
        debug!(runs, chunks, seed, "simulating brackets");

        let titles = (0..chunks)
            .into_par_iter()
            .map(|chunk| {
                let mut rng = StdRng::seed_from_u64(seed.wrapping_add(chunk as u64));
                let chunk_runs = CHUNK_RUNS.min(runs - chunk * CHUNK_RUNS);
                let mut counts = vec![0usize; teams.len()];
                for _ in 0..chunk_runs {
                    counts[play_champion(teams, self.table(), &mut rng)] += 1;
                }
                counts
            })
            .reduce(
                || vec![0usize; teams.len()],
                |mut acc, counts| {
                    for (a, c) in acc.iter_mut().zip(counts) {
                        *a += c;
                    }
                    acc
                },
            );

        let champions = teams
            .iter()
            .cloned()
            .zip(titles)
            .map(|(team, titles)| ChampionCount { team, titles })
            .collect();
        Ok(SimulationSummary {
            runs,
            seed,
            champions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_bracket::{build_deterministic_bracket, build_seeded_bracket};

    #[test]
    fn test_zero_runs_rejected() {
        let bracket = build_deterministic_bracket();
        assert_eq!(bracket.simulate(0, 1), Err(SimulationError::NoRuns));
    }

    #[test]
    fn test_simulate_once_respects_certain_games() {
        let bracket = build_deterministic_bracket();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let tree = bracket.simulate_once(&mut rng);
            let (left, right) = tree.children().unwrap();
            assert_eq!(left.winner().name(), "A");
            assert_eq!(right.winner().name(), "D");
            assert_eq!(tree.match_count(), 3);
            assert!(bracket.table().likelihood(&tree) > 0.0);
        }
    }

    #[test]
    fn test_simulation_is_reproducible() {
        let bracket = build_seeded_bracket(16);
        let a = bracket.simulate(10_000, 42).unwrap();
        let b = bracket.simulate(10_000, 42).unwrap();
        assert_eq!(a, b);
        let total: usize = a.champions.iter().map(|c| c.titles).sum();
        assert_eq!(total, 10_000);
        assert!((a.to_distribution().total() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_simulation_converges_to_marginals() {
        let bracket = build_seeded_bracket(16);
        let exact = bracket.probability_of_each_team();
        let summary = bracket.simulate(200_000, 3).unwrap();
        for entry in exact.iter() {
            let freq = summary.frequency(entry.team.name()).unwrap();
            assert!(
                (freq - entry.probability).abs() < 0.01,
                "{}: simulated {} vs exact {}",
                entry.team,
                freq,
                entry.probability
            );
        }
    }
}
