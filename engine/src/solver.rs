//! Divide-and-conquer solvers over a seeded team list
//!
//! Both solvers split the team list at its midpoint, solve each half, then
//! combine every (left, right) pairing of possible half winners:
//!
//! - `best_paths` is a max-product DP. For each team it keeps the single most
//!   likely set of outcomes that makes it the sub-bracket winner.
//! - `win_distribution` is a sum-product DP. For each team it accumulates the
//!   probability mass of every outcome set that makes it the winner.
//!
//! The recursion only reads the team slice and the probability table, so the
//! two halves of a large split are solved in parallel via Rayon. Combination
//! always walks the left results in seed order and, for each, the right results
//! in seed order, which makes the output independent of scheduling.

use crate::node::MatchTree;
use crate::probability::ProbabilityTable;
use crate::team::Team;
use serde::Serialize;
use std::sync::Arc;

/// Splits at or above this many teams solve their halves on separate Rayon tasks
const PARALLEL_SPLIT_MIN: usize = 32;

/// Best way for one team to win a sub-bracket
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contender {
    pub team: Team,
    /// Probability of the most likely outcome set that crowns `team`
    pub probability: f64,
    /// The outcome set itself
    pub tree: Arc<MatchTree>,
}

fn fork<A, B, RA, RB>(size: usize, left: A, right: B) -> (RA, RB)
where
    A: FnOnce() -> RA + Send,
    B: FnOnce() -> RB + Send,
    RA: Send,
    RB: Send,
{
    if size >= PARALLEL_SPLIT_MIN {
        rayon::join(left, right)
    } else {
        (left(), right())
    }
}

/// Max-likelihood sub-bracket for every team that can win `teams`.
///
/// Returned in seed order. A team is present only if some outcome set with
/// positive probability crowns it. On exact ties the pairing visited first
/// (left seed order, then right seed order) is kept.
pub(crate) fn best_paths(teams: &[Team], table: &ProbabilityTable) -> Vec<Contender> {
    if let [team] = teams {
        return vec![Contender {
            team: team.clone(),
            probability: 1.0,
            tree: Arc::new(MatchTree::leaf(team.clone())),
        }];
    }

    let (lo, hi) = teams.split_at(teams.len() / 2);
    let (left, right) = fork(
        teams.len(),
        || best_paths(lo, table),
        || best_paths(hi, table),
    );

    // Slots are indexed by position in `left` then `right` so the output keeps seed order
    let mut best: Vec<Option<Contender>> = vec![None; left.len() + right.len()];
    for (i, a) in left.iter().enumerate() {
        for (j, b) in right.iter().enumerate() {
            let p_a = table.win_probability(a.team.name(), b.team.name());
            let reach = a.probability * b.probability;
            improve(&mut best[i], &a.team, reach * p_a, a, b);
            improve(&mut best[left.len() + j], &b.team, reach * (1.0 - p_a), a, b);
        }
    }
    best.into_iter().flatten().collect()
}

/// Replace `slot` if `candidate` strictly beats it (an empty slot counts as 0.0)
fn improve(slot: &mut Option<Contender>, team: &Team, candidate: f64, a: &Contender, b: &Contender) {
    let current = slot.as_ref().map_or(0.0, |c| c.probability);
    if candidate > current {
        *slot = Some(Contender {
            team: team.clone(),
            probability: candidate,
            tree: Arc::new(MatchTree::played(
                team.clone(),
                Arc::clone(&a.tree),
                Arc::clone(&b.tree),
            )),
        });
    }
}

/// Probability that each team wins `teams`, aligned with `teams`.
pub(crate) fn win_distribution(teams: &[Team], table: &ProbabilityTable) -> Vec<f64> {
    if teams.len() == 1 {
        return vec![1.0];
    }

    let half = teams.len() / 2;
    let (lo, hi) = teams.split_at(half);
    let (left, right) = fork(
        teams.len(),
        || win_distribution(lo, table),
        || win_distribution(hi, table),
    );

    let mut dist = vec![0.0_f64; teams.len()];
    for (i, &pa) in left.iter().enumerate() {
        for (j, &pb) in right.iter().enumerate() {
            let p_a = table.win_probability(lo[i].name(), hi[j].name());
            let reach = pa * pb;
            dist[i] += reach * p_a;
            dist[half + j] += reach * (1.0 - p_a);
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_bracket::{names, seeded_table};

    fn table(entries: &[(&str, &str, f64)]) -> ProbabilityTable {
        let mut table = ProbabilityTable::new();
        for &(a, b, p) in entries {
            table.set_matchup(Team::from(a), Team::from(b), p).unwrap();
        }
        table
    }

    #[test]
    fn test_single_team_is_leaf() {
        let teams = names(&["A"]);
        let best = best_paths(&teams, &ProbabilityTable::new());
        assert_eq!(best.len(), 1);
        assert!((best[0].probability - 1.0).abs() < 1e-12);
        assert!(best[0].tree.is_leaf());
        assert_eq!(win_distribution(&teams, &ProbabilityTable::new()), vec![1.0]);
    }

    #[test]
    fn test_two_team_split() {
        let teams = names(&["A", "B"]);
        let t = table(&[("A", "B", 0.7)]);
        let best = best_paths(&teams, &t);
        assert_eq!(best.len(), 2);
        assert_eq!(best[0].team.name(), "A");
        assert!((best[0].probability - 0.7).abs() < 1e-12);
        assert_eq!(best[1].team.name(), "B");
        assert!((best[1].probability - 0.3).abs() < 1e-12);

        let dist = win_distribution(&teams, &t);
        assert!((dist[0] - 0.7).abs() < 1e-12);
        assert!((dist[1] - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_best_path_is_max_not_sum() {
        // A is 0.9 over B; C and D are a coin flip; A beats C 0.6 and D 0.7
        let teams = names(&["A", "B", "C", "D"]);
        let t = table(&[("A", "B", 0.9), ("C", "D", 0.5), ("A", "C", 0.6), ("A", "D", 0.7)]);
        let best = best_paths(&teams, &t);
        let a = best.iter().find(|c| c.team.name() == "A").unwrap();
        // best path goes through D: 0.9 * 0.5 * 0.7
        assert!((a.probability - 0.315).abs() < 1e-12);
        assert_eq!(a.tree.children().unwrap().1.winner().name(), "D");

        // marginal sums both paths: 0.9 * (0.5 * 0.6 + 0.5 * 0.7)
        let dist = win_distribution(&teams, &t);
        assert!((dist[0] - 0.585).abs() < 1e-12);
    }

    #[test]
    fn test_zero_probability_team_is_dropped() {
        // D always beats C, so C can never win the bracket
        let teams = names(&["A", "B", "C", "D"]);
        let t = table(&[("A", "B", 0.6), ("C", "D", 0.0)]);
        let best = best_paths(&teams, &t);
        let winners: Vec<&str> = best.iter().map(|c| c.team.name()).collect();
        assert_eq!(winners, ["A", "B", "D"]);

        let dist = win_distribution(&teams, &t);
        assert_eq!(dist[2], 0.0);
    }

    #[test]
    fn test_tie_keeps_first_pairing() {
        // Every game is even, so A's candidates through C and D tie; C is visited first
        let teams = names(&["A", "B", "C", "D"]);
        let best = best_paths(&teams, &ProbabilityTable::new());
        let a = &best[0];
        assert!((a.probability - 0.125).abs() < 1e-12);
        assert_eq!(a.tree.children().unwrap().1.winner().name(), "C");
    }

    #[test]
    fn test_parallel_split_matches_sequential_order() {
        let teams: Vec<Team> = (0..64).map(|i| Team::from(format!("T{i}"))).collect();
        let t = seeded_table(&teams);
        let first = best_paths(&teams, &t);
        let second = best_paths(&teams, &t);
        assert_eq!(first, second);
        let dist_a = win_distribution(&teams, &t);
        let dist_b = win_distribution(&teams, &t);
        assert_eq!(
            dist_a.iter().map(|p| p.to_bits()).collect::<Vec<_>>(),
            dist_b.iter().map(|p| p.to_bits()).collect::<Vec<_>>()
        );
    }
}
