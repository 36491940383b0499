//! Bracket engine: validated inputs and the top-level solver entry points

use crate::distribution::Distribution;
use crate::error::InvalidConfiguration;
use crate::node::{flatten_matches, Match, MatchTree};
use crate::probability::ProbabilityTable;
use crate::solver::{best_paths, win_distribution, Contender};
use crate::team::Team;
use serde::Serialize;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::debug;

/// Largest supported bracket. With 1023 games the most likely bracket still has
/// probability of at least 2^-1023, which stays above f64 underflow.
pub const MAX_TEAMS: usize = 1024;

/// A single-elimination bracket with its pairwise win probabilities.
///
/// Team order is the seeding: the first half of the list plays through to
/// meet the second half in the final, recursively. Both inputs are fixed at
/// construction and every solver call is a pure function of them.
#[derive(Debug, Clone)]
pub struct Bracket {
    teams: Vec<Team>,
    table: ProbabilityTable,
}

/// Maximum-likelihood resolution of a whole bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MostLikelyBracket {
    pub champion: Team,
    /// Joint probability of every outcome in `tree`
    pub probability: f64,
    pub tree: Arc<MatchTree>,
}

impl MostLikelyBracket {
    /// Explicit matches, first round first within each sub-bracket
    pub fn matches(&self) -> Vec<Match> {
        flatten_matches(&self.tree, self.tree.leaves().len())
    }
}

/// Both solver outputs for one bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub most_likely: MostLikelyBracket,
    pub marginals: Distribution,
}

impl Bracket {
    /// Validate the team list and take ownership of the inputs.
    ///
    /// Fails if there are fewer than two teams, the count is not a power of
    /// two, the count exceeds [`MAX_TEAMS`], or a team is listed twice.
    pub fn new(teams: Vec<Team>, table: ProbabilityTable) -> Result<Self, InvalidConfiguration> {
        let count = teams.len();
        if count < 2 {
            return Err(InvalidConfiguration::TooFewTeams { count });
        }
        if !count.is_power_of_two() {
            return Err(InvalidConfiguration::NotPowerOfTwo { count });
        }
        if count > MAX_TEAMS {
            return Err(InvalidConfiguration::TooManyTeams {
                count,
                max: MAX_TEAMS,
            });
        }
        let mut seen = HashSet::with_capacity(count);
        for team in &teams {
            if !seen.insert(team) {
                return Err(InvalidConfiguration::DuplicateTeam { team: team.clone() });
            }
        }
        debug!(teams = count, entries = table.len(), "bracket configured");
        Ok(Bracket { teams, table })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn table(&self) -> &ProbabilityTable {
        &self.table
    }

    pub fn size(&self) -> usize {
        self.teams.len()
    }

    /// Number of rounds (log2 of the team count)
    pub fn rounds(&self) -> u32 {
        self.teams.len().ilog2()
    }

    /// Best path to the title for every team that has one, in seed order
    pub fn contenders(&self) -> Vec<Contender> {
        debug!(teams = self.teams.len(), "solving max-likelihood sub-brackets");
        best_paths(&self.teams, &self.table)
    }

    /// The single most likely full set of outcomes.
    ///
    /// The champion is the contender with the highest probability; on an exact
    /// tie the earlier seed is chosen.
    pub fn most_likely_bracket(&self) -> MostLikelyBracket {
        let mut contenders = self.contenders().into_iter();
        // Validation caps the size so the best path never underflows to zero
        let mut best = contenders
            .next()
            .expect("a validated bracket always has a contender");
        for contender in contenders {
            if contender.probability > best.probability {
                best = contender;
            }
        }
        debug!(champion = %best.team, probability = best.probability, "most likely bracket");
        MostLikelyBracket {
            champion: best.team,
            probability: best.probability,
            tree: best.tree,
        }
    }

    /// Exact probability that each team wins the bracket, in seed order
    pub fn probability_of_each_team(&self) -> Distribution {
        debug!(teams = self.teams.len(), "solving marginal win probabilities");
        let dist = win_distribution(&self.teams, &self.table);
        Distribution::from_parts(&self.teams, dist)
    }

    /// Run both solvers concurrently
    pub fn analyze(&self) -> Analysis {
        let (most_likely, marginals) = rayon::join(
            || self.most_likely_bracket(),
            || self.probability_of_each_team(),
        );
        Analysis {
            most_likely,
            marginals,
        }
    }
}
