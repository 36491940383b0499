//! Team identifiers

use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Opaque team identifier.
///
/// Backed by a shared string so that match trees, which repeat the same team
/// at every level it wins, clone names without allocating.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Team(Arc<str>);

impl Team {
    /// Create a team from its name
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Team(name.into())
    }

    /// Get the team name
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Team {
    fn from(name: &str) -> Self {
        Team::new(name)
    }
}

impl From<String> for Team {
    fn from(name: String) -> Self {
        Team::new(name)
    }
}

impl Borrow<str> for Team {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
