//! Error types raised by the engine

use crate::team::Team;
use thiserror::Error;

/// Rejected team list. Raised by [`crate::Bracket::new`] before any solving.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidConfiguration {
    #[error("invalid configuration: a bracket needs at least 2 teams, got {count}")]
    TooFewTeams { count: usize },

    #[error("invalid configuration: team count {count} is not a power of two")]
    NotPowerOfTwo { count: usize },

    #[error("invalid configuration: {count} teams exceeds the supported maximum of {max}")]
    TooManyTeams { count: usize, max: usize },

    #[error("invalid configuration: team {team} appears more than once")]
    DuplicateTeam { team: Team },
}

/// Rejected entry in a [`crate::ProbabilityTable`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProbabilityError {
    #[error("probability that {winner} beats {loser} must be within [0, 1], got {value}")]
    OutOfRange {
        winner: Team,
        loser: Team,
        value: f64,
    },

    #[error("team {team} cannot play itself")]
    SelfMatch { team: Team },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("simulation needs at least one run")]
    NoRuns,
}
