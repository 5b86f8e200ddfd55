//! Type-safe wrappers for FPL identifiers.

use crate::error::{AnalyzerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Fantasy Premier League team (entry) IDs.
///
/// Parsing is strict: the input is trimmed and must be a positive integer.
/// Anything else is rejected before any request is made.
///
/// # Examples
///
/// ```rust
/// use fpl_analyzer::TeamId;
///
/// let team_id: TeamId = " 12345 ".parse().unwrap();
/// assert_eq!(team_id.as_u64(), 12345);
/// assert!("0".parse::<TeamId>().is_err());
/// assert!("".parse::<TeamId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    /// Create a TeamId, rejecting zero.
    pub fn new(id: u64) -> Option<Self> {
        (id >= 1).then_some(Self(id))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .ok()
            .and_then(TeamId::new)
            .ok_or_else(|| AnalyzerError::InvalidTeamId {
                input: s.to_string(),
            })
    }
}

/// Type-safe wrapper for Player IDs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl PlayerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PlayerId {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| AnalyzerError::InvalidPlayerId {
                input: s.to_string(),
            })
    }
}
