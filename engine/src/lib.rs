//! bracket Engine - Single-elimination bracket solvers
//!
//! Given a seeded team list (a power of two) and a pairwise win-probability
//! table, the engine computes:
//! - the maximum-likelihood full bracket and its champion
//! - the exact probability that each team wins the tournament
//! - a flattened, round-by-round list of the predicted matches
//! - Monte-Carlo title counts from randomly drawn brackets
//!
//! The engine does no I/O; loading inputs and rendering results live in the
//! loader and CLI crates.

pub mod bracket;
pub mod distribution;
pub mod error;
pub mod node;
pub mod probability;
pub mod simulate;
pub mod solver;
pub mod team;
pub mod test_bracket;

pub use bracket::{Analysis, Bracket, MostLikelyBracket, MAX_TEAMS};
pub use distribution::{Distribution, TeamProbability};
pub use error::{InvalidConfiguration, ProbabilityError, SimulationError};
pub use node::{flatten_matches, Match, MatchTree};
pub use probability::{ProbabilityTable, DEFAULT_WIN_PROBABILITY};
pub use simulate::{ChampionCount, SimulationSummary};
pub use solver::Contender;
pub use team::Team;
