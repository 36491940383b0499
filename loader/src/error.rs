use bracket_engine::ProbabilityError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to read bracket inputs. Distinct from the engine's
/// `InvalidConfiguration`, which is raised once the inputs are assembled.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("line {line}: expected 3 columns (team_a, team_b, probability_a_wins), found {fields}")]
    MalformedRow { line: u64, fields: usize },

    #[error("line {line}: {value:?} is not a number")]
    InvalidNumber { line: u64, value: String },

    #[error("line {line}: team name is empty")]
    EmptyTeamName { line: u64 },

    #[error("line {line}: {source}")]
    Probability {
        line: u64,
        #[source]
        source: ProbabilityError,
    },
}
