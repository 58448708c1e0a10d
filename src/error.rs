use std::fmt;

use thiserror::Error;

/// Direction of a history move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Backward => f.write_str("backward"),
            Direction::Forward => f.write_str("forward"),
        }
    }
}

/// Conditions reported by history lookups and navigation attempts.
///
/// None of these are fatal: the controller logs them and hands them back to
/// the caller, and the history is left exactly as it was.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("no {direction} history")]
    EmptyHistory { direction: Direction },

    #[error("{id} is not a location in history")]
    InvalidId { id: usize },

    #[error("cannot remove the current location (id {id})")]
    CurrentLocationProtected { id: usize },

    #[error("cannot change location to {target}: {source}")]
    NavigationFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl HistoryError {
    pub fn empty(direction: Direction) -> Self {
        Self::EmptyHistory { direction }
    }

    pub fn invalid(id: usize) -> Self {
        Self::InvalidId { id }
    }
}

pub type Result<T> = std::result::Result<T, HistoryError>;
