//! Per-team probability distributions

use crate::team::Team;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamProbability {
    pub team: Team,
    pub probability: f64,
}

/// Probability of each team, kept in bracket seed order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Distribution {
    entries: Vec<TeamProbability>,
}

impl Distribution {
    /// Pair `teams` with `probabilities` position by position
    pub fn from_parts(teams: &[Team], probabilities: Vec<f64>) -> Self {
        let entries = teams
            .iter()
            .cloned()
            .zip(probabilities)
            .map(|(team, probability)| TeamProbability { team, probability })
            .collect();
        Distribution { entries }
    }

    pub fn get(&self, team: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.team.name() == team)
            .map(|e| e.probability)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TeamProbability> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all probabilities (1.0 up to rounding for a full bracket)
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|e| e.probability).sum()
    }

    /// Entries by descending probability; ties keep seed order
    pub fn sorted(&self) -> Vec<TeamProbability> {
        let mut sorted = self.entries.clone();
        sorted.sort_by(|a, b| b.probability.total_cmp(&a.probability));
        sorted
    }
}
