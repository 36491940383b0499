//! Pairwise win-probability table
//!
//! Every directed pair (A, B) is looked up on its own. The table never infers
//! (B, A) from (A, B); symmetric completion is the caller's job and is offered
//! through [`ProbabilityTable::set_matchup`]. Pairs that are absent resolve to
//! [`DEFAULT_WIN_PROBABILITY`].

use crate::error::ProbabilityError;
use crate::node::MatchTree;
use crate::team::Team;
use std::collections::{HashMap, HashSet};

/// Win probability assumed for a pair with no entry (no information)
pub const DEFAULT_WIN_PROBABILITY: f64 = 0.5;

/// P(A beats B) for ordered pairs of teams
#[derive(Debug, Clone, Default)]
pub struct ProbabilityTable {
    /// pairs[a][b] = probability that a beats b
    pairs: HashMap<Team, HashMap<Team, f64>>,
}

impl ProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record P(`winner` beats `loser`) for this direction only
    pub fn set(&mut self, winner: Team, loser: Team, probability: f64) -> Result<(), ProbabilityError> {
        if winner == loser {
            return Err(ProbabilityError::SelfMatch { team: winner });
        }
        // `contains` is false for NaN
        if !(0.0..=1.0).contains(&probability) {
            return Err(ProbabilityError::OutOfRange {
                winner,
                loser,
                value: probability,
            });
        }
        self.pairs.entry(winner).or_default().insert(loser, probability);
        Ok(())
    }

    /// Record P(`a` beats `b`) = `probability` and P(`b` beats `a`) = 1 - `probability`
    pub fn set_matchup(&mut self, a: Team, b: Team, probability: f64) -> Result<(), ProbabilityError> {
        self.set(a.clone(), b.clone(), probability)?;
        self.set(b, a, 1.0 - probability)
    }

    /// Stored probability for the directed pair, if any
    pub fn get(&self, winner: &str, loser: &str) -> Option<f64> {
        self.pairs.get(winner).and_then(|row| row.get(loser)).copied()
    }

    /// P(`winner` beats `loser`), falling back to [`DEFAULT_WIN_PROBABILITY`]
    pub fn win_probability(&self, winner: &str, loser: &str) -> f64 {
        self.get(winner, loser).unwrap_or(DEFAULT_WIN_PROBABILITY)
    }

    /// Number of directed entries
    pub fn len(&self) -> usize {
        self.pairs.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether `team` appears on either side of any entry
    pub fn mentions(&self, team: &str) -> bool {
        self.pairs.contains_key(team) || self.pairs.values().any(|row| row.contains_key(team))
    }

    /// Every team named by the table, in no particular order
    pub fn teams(&self) -> impl Iterator<Item = &Team> {
        let mut seen: HashSet<&Team> = HashSet::new();
        for (winner, row) in &self.pairs {
            seen.insert(winner);
            seen.extend(row.keys());
        }
        seen.into_iter()
    }

    /// Unordered pairs of `teams` with no entry in either direction.
    ///
    /// Pairs are reported as (earlier, later) in `teams` order. Missing pairs
    /// are not an error for the solvers; this exists for callers that want to
    /// reject incomplete tables.
    pub fn missing_pairs(&self, teams: &[Team]) -> Vec<(Team, Team)> {
        let mut missing = Vec::new();
        for (i, a) in teams.iter().enumerate() {
            for b in &teams[i + 1..] {
                if self.get(a.name(), b.name()).is_none() && self.get(b.name(), a.name()).is_none() {
                    missing.push((a.clone(), b.clone()));
                }
            }
        }
        missing
    }

    /// Joint probability of every outcome recorded in `tree`
    pub fn likelihood(&self, tree: &MatchTree) -> f64 {
        match tree {
            MatchTree::Leaf { .. } => 1.0,
            MatchTree::Match {
                winner,
                left,
                right,
            } => {
                // P(left beats right) decides the game in either direction
                let left_wins = self.win_probability(left.winner().name(), right.winner().name());
                let game = if left.winner() == winner {
                    left_wins
                } else {
                    1.0 - left_wins
                };
                self.likelihood(left) * self.likelihood(right) * game
            }
        }
    }
}
