//! Match tree definitions
//!
//! A match tree records one fully-resolved bracket (or sub-bracket). Leaves are
//! the seeded teams; every internal node is a played match whose children are
//! the sub-brackets that produced the two finalists. Trees are built bottom-up
//! and never mutated, so children are shared between candidate brackets.

use crate::team::Team;
use serde::Serialize;
use std::sync::Arc;

/// Node in a bracket's match tree
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchTree {
    /// A seeded team before any game is played
    Leaf { team: Team },
    /// A played match
    Match {
        /// Team that won this match
        winner: Team,
        /// Sub-bracket that produced the left finalist
        left: Arc<MatchTree>,
        /// Sub-bracket that produced the right finalist
        right: Arc<MatchTree>,
    },
}

/// One explicit match extracted from a match tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// 1 for the first round, log2(n) for the final of an n-team bracket
    pub round: u32,
    pub left: Team,
    pub right: Team,
    pub winner: Team,
}

impl MatchTree {
    pub fn leaf(team: Team) -> Self {
        MatchTree::Leaf { team }
    }

    /// Build a match node from the two sub-brackets that met in it
    pub fn played(winner: Team, left: Arc<MatchTree>, right: Arc<MatchTree>) -> Self {
        MatchTree::Match {
            winner,
            left,
            right,
        }
    }

    /// Team that emerges from this (sub-)bracket
    pub fn winner(&self) -> &Team {
        match self {
            MatchTree::Leaf { team } => team,
            MatchTree::Match { winner, .. } => winner,
        }
    }

    /// Left and right sub-brackets (None for leaves)
    pub fn children(&self) -> Option<(&MatchTree, &MatchTree)> {
        match self {
            MatchTree::Leaf { .. } => None,
            MatchTree::Match { left, right, .. } => Some((left.as_ref(), right.as_ref())),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MatchTree::Leaf { .. })
    }

    /// Seeded teams in bracket order
    pub fn leaves(&self) -> Vec<&Team> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a Team>) {
        match self {
            MatchTree::Leaf { team } => out.push(team),
            MatchTree::Match { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Number of played matches (internal nodes)
    pub fn match_count(&self) -> usize {
        match self {
            MatchTree::Leaf { .. } => 0,
            MatchTree::Match { left, right, .. } => 1 + left.match_count() + right.match_count(),
        }
    }

    /// Winner of every match with its round, counted up from the leaves.
    ///
    /// Order is left sub-bracket, right sub-bracket, then this node, so each
    /// team appears after every match that fed into it.
    pub fn winners(&self) -> Vec<(u32, Team)> {
        let mut out = Vec::new();
        self.collect_winners(&mut out);
        out
    }

    /// Returns the height of `self` (0 for a leaf)
    fn collect_winners(&self, out: &mut Vec<(u32, Team)>) -> u32 {
        match self {
            MatchTree::Leaf { .. } => 0,
            MatchTree::Match {
                winner,
                left,
                right,
            } => {
                let below = left.collect_winners(out).max(right.collect_winners(out));
                out.push((below + 1, winner.clone()));
                below + 1
            }
        }
    }
}

/// Flatten a match tree for a `size`-team sub-bracket into explicit matches.
///
/// The match at the root is numbered round log2(`size`); each child is treated
/// as a `size / 2` sub-bracket. Recursion stops at leaves or once `size <= 1`.
pub fn flatten_matches(tree: &MatchTree, size: usize) -> Vec<Match> {
    let mut out = Vec::new();
    collect_matches(tree, size, &mut out);
    out
}

fn collect_matches(tree: &MatchTree, size: usize, out: &mut Vec<Match>) {
    if size <= 1 {
        return;
    }
    let Some((left, right)) = tree.children() else {
        return;
    };
    let half = size / 2;
    collect_matches(left, half, out);
    collect_matches(right, half, out);
    out.push(Match {
        round: size.ilog2(),
        left: left.winner().clone(),
        right: right.winner().clone(),
        winner: tree.winner().clone(),
    });
}
