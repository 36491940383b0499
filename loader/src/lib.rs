//! bracket Loader - Reads bracket inputs from files
//!
//! This crate builds the engine's inputs from the two files a user supplies:
//! - a team list, one team per line, in seed order
//! - a pairwise probability CSV: `team_a,team_b,probability_a_wins`
//!
//! Each CSV row is stored in both directions, (B, A) = 1 - p. Pairs that never
//! appear are left out so the engine applies its 0.5 default.

mod error;

pub use error::LoadError;

use bracket_engine::{ProbabilityTable, Team};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// How to read the probability CSV
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
    /// Treat the first row as a header and skip it
    pub has_headers: bool,
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a team list from a newline-separated file
pub fn load_teams(path: impl AsRef<Path>) -> Result<Vec<Team>, LoadError> {
    let path = path.as_ref();
    let teams = parse_teams(BufReader::new(open(path)?))?;
    debug!(path = %path.display(), teams = teams.len(), "loaded team list");
    Ok(teams)
}

/// Read one team per line; surrounding whitespace is trimmed and blank lines skipped
pub fn parse_teams<R: BufRead>(reader: R) -> Result<Vec<Team>, LoadError> {
    let mut teams = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let name = line.trim();
        if !name.is_empty() {
            teams.push(Team::from(name));
        }
    }
    Ok(teams)
}

/// Load a pairwise probability table from a CSV file
pub fn load_probabilities(path: impl AsRef<Path>, options: CsvOptions) -> Result<ProbabilityTable, LoadError> {
    let path = path.as_ref();
    let table = parse_probabilities(open(path)?, options)?;
    debug!(path = %path.display(), entries = table.len(), "loaded probability table");
    Ok(table)
}

/// Read `team_a,team_b,probability_a_wins` rows.
///
/// Rows whose first field starts with `#` and rows with only empty fields are
/// skipped. A later row for the same pair overwrites the earlier one.
pub fn parse_probabilities<R: Read>(reader: R, options: CsvOptions) -> Result<ProbabilityTable, LoadError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(options.has_headers)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = ProbabilityTable::new();
    let mut rows = 0usize;
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map_or(0, |pos| pos.line());

        if record.iter().all(str::is_empty) || record[0].starts_with('#') {
            continue;
        }
        if record.len() != 3 {
            return Err(LoadError::MalformedRow {
                line,
                fields: record.len(),
            });
        }
        if record[0].is_empty() || record[1].is_empty() {
            return Err(LoadError::EmptyTeamName { line });
        }
        let probability: f64 = record[2].parse().map_err(|_| LoadError::InvalidNumber {
            line,
            value: record[2].to_string(),
        })?;

        table
            .set_matchup(Team::from(&record[0]), Team::from(&record[1]), probability)
            .map_err(|source| LoadError::Probability { line, source })?;
        rows += 1;
    }
    debug!(rows, entries = table.len(), "parsed probability rows");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bracket_engine::ProbabilityError;

    fn parse(input: &str) -> Result<ProbabilityTable, LoadError> {
        parse_probabilities(input.as_bytes(), CsvOptions::default())
    }

    #[test]
    fn test_parse_teams_skips_blank_lines() {
        let teams = parse_teams("Duke\n\n  Kansas  \n\t\nGonzaga\n".as_bytes()).unwrap();
        let names: Vec<&str> = teams.iter().map(|t| t.name()).collect();
        assert_eq!(names, ["Duke", "Kansas", "Gonzaga"]);
    }

    #[test]
    fn test_parse_probabilities_completes_both_directions() {
        let table = parse("A,B,0.7\nC, D , 0.25\n").unwrap();
        assert_eq!(table.len(), 4);
        assert!((table.win_probability("A", "B") - 0.7).abs() < 1e-12);
        assert!((table.win_probability("B", "A") - 0.3).abs() < 1e-12);
        assert!((table.win_probability("C", "D") - 0.25).abs() < 1e-12);
        assert!((table.win_probability("D", "C") - 0.75).abs() < 1e-12);
        // absent pair falls back to the engine default
        assert_eq!(table.get("A", "C"), None);
    }

    #[test]
    fn test_comments_and_blank_rows_skipped() {
        let input = "# team_a,team_b,probability_a_wins\nA,B,0.6\n\n   # indented comment\nB,C,0.1\n";
        let table = parse(input).unwrap();
        assert_eq!(table.len(), 4);
        assert!((table.win_probability("C", "B") - 0.9).abs() < 1e-12);
    }

    #[test]
    fn test_header_row() {
        let input = "team_a,team_b,probability_a_wins\nA,B,0.6\n";
        assert!(matches!(parse(input), Err(LoadError::InvalidNumber { line: 1, .. })));

        let table = parse_probabilities(input.as_bytes(), CsvOptions { has_headers: true }).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_later_row_overwrites() {
        let table = parse("A,B,0.6\nB,A,0.1\n").unwrap();
        assert!((table.win_probability("A", "B") - 0.9).abs() < 1e-12);
        assert!((table.win_probability("B", "A") - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_malformed_rows_report_line() {
        assert!(matches!(
            parse("A,B,0.6\nA,C\n"),
            Err(LoadError::MalformedRow { line: 2, fields: 2 })
        ));
        assert!(matches!(
            parse("A,B,0.6,extra\n"),
            Err(LoadError::MalformedRow { line: 1, fields: 4 })
        ));
        match parse("A,B,0.5\nA,C,likely\n") {
            Err(LoadError::InvalidNumber { line, value }) => {
                assert_eq!(line, 2);
                assert_eq!(value, "likely");
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
        assert!(matches!(parse(",B,0.5\n"), Err(LoadError::EmptyTeamName { line: 1 })));
    }

    #[test]
    fn test_out_of_range_probability() {
        match parse("A,B,1.2\n") {
            Err(LoadError::Probability { line: 1, source }) => {
                assert!(matches!(source, ProbabilityError::OutOfRange { .. }));
            }
            other => panic!("expected Probability error, got {:?}", other),
        }
        assert!(matches!(
            parse("A,A,0.5\n"),
            Err(LoadError::Probability {
                source: ProbabilityError::SelfMatch { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = load_teams("/nonexistent/bracket/teams.txt").unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(err.to_string().contains("/nonexistent/bracket/teams.txt"));
    }
}
