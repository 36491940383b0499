//! Hardcoded brackets for solver tests and benchmarks
//!
//!   two-team:      A vs B, P(A beats B) = 0.7
//!   four-team:     [A, B, C, D]
//!                  A-B 0.9, C-D 0.8, A-C 0.6, A-D 0.7, B-C 0.5, B-D 0.5
//!                  most likely: A beats B, C beats D, A beats C (p = 0.432)
//!   deterministic: [A, B, C, D]
//!                  A always beats B, D always beats C, A-D is a coin flip
//!   uniform(n):    T0..T(n-1), every game 0.5
//!   seeded(n):     T0..T(n-1), Bradley-Terry strengths n, n-1, .., 1 so the
//!                  earlier seed is always the favourite

use crate::bracket::Bracket;
use crate::probability::ProbabilityTable;
use crate::team::Team;

/// Build a team list from names
pub fn names(names: &[&str]) -> Vec<Team> {
    names.iter().map(|&n| Team::from(n)).collect()
}

/// Numbered teams T0..T(n-1)
pub fn numbered(n: usize) -> Vec<Team> {
    (0..n).map(|i| Team::from(format!("T{i}"))).collect()
}

fn table(entries: &[(&str, &str, f64)]) -> ProbabilityTable {
    let mut table = ProbabilityTable::new();
    for &(a, b, p) in entries {
        table
            .set_matchup(Team::from(a), Team::from(b), p)
            .expect("fixture probabilities are within [0, 1]");
    }
    table
}

fn bracket(teams: Vec<Team>, table: ProbabilityTable) -> Bracket {
    Bracket::new(teams, table).expect("fixture brackets are valid")
}

pub fn build_two_team_bracket() -> Bracket {
    bracket(names(&["A", "B"]), table(&[("A", "B", 0.7)]))
}

pub fn build_four_team_bracket() -> Bracket {
    bracket(
        names(&["A", "B", "C", "D"]),
        table(&[
            ("A", "B", 0.9),
            ("C", "D", 0.8),
            ("A", "C", 0.6),
            ("A", "D", 0.7),
            ("B", "C", 0.5),
            ("B", "D", 0.5),
        ]),
    )
}

pub fn build_deterministic_bracket() -> Bracket {
    bracket(
        names(&["A", "B", "C", "D"]),
        table(&[("A", "B", 1.0), ("C", "D", 0.0), ("A", "D", 0.5)]),
    )
}

/// Every pair explicitly set to 0.5
pub fn build_uniform_bracket(n: usize) -> Bracket {
    let teams = numbered(n);
    let mut table = ProbabilityTable::new();
    for (i, a) in teams.iter().enumerate() {
        for b in &teams[i + 1..] {
            table
                .set_matchup(a.clone(), b.clone(), 0.5)
                .expect("0.5 is a valid probability");
        }
    }
    bracket(teams, table)
}

/// Complete table where P(i beats j) = s_i / (s_i + s_j) with s_i = n - i
pub fn seeded_table(teams: &[Team]) -> ProbabilityTable {
    let n = teams.len() as f64;
    let mut table = ProbabilityTable::new();
    for (i, a) in teams.iter().enumerate() {
        for (j, b) in teams.iter().enumerate().skip(i + 1) {
            let (si, sj) = (n - i as f64, n - j as f64);
            table
                .set_matchup(a.clone(), b.clone(), si / (si + sj))
                .expect("strength ratios are within [0, 1]");
        }
    }
    table
}

pub fn build_seeded_bracket(n: usize) -> Bracket {
    let teams = numbered(n);
    let table = seeded_table(&teams);
    bracket(teams, table)
}
