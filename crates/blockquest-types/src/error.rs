//! Error types shared across BlockQuest crates.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A run-time budget failure.
///
/// Both variants end the run early; the trace accumulated so far stays
/// valid. On the wire a `RunError` is its display message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RunError {
    /// The cumulative move/bump counter passed the step budget.
    #[error("Too many steps! Simplify your code.")]
    TooManySteps,
    /// A nested block list was entered beyond the depth budget.
    #[error("Too much nesting")]
    TooMuchNesting,
}

impl RunError {
    /// Reverse of `Display`.
    pub fn from_message(message: &str) -> Option<Self> {
        [Self::TooManySteps, Self::TooMuchNesting]
            .into_iter()
            .find(|e| e.to_string() == message)
    }
}

impl Serialize for RunError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RunError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let message = String::deserialize(deserializer)?;
        Self::from_message(&message)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown run error: {message}")))
    }
}

/// A text map could not be turned into a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell symbol '{symbol}' at {row}:{col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
}

/// A direction index outside `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid direction {0}, expected 0..=3")]
pub struct InvalidDirection(pub u8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_error_messages() {
        assert_eq!(
            RunError::TooManySteps.to_string(),
            "Too many steps! Simplify your code."
        );
        assert_eq!(RunError::TooMuchNesting.to_string(), "Too much nesting");
    }

    #[test]
    fn test_run_error_wire_form() {
        let json = serde_json::to_string(&RunError::TooMuchNesting).unwrap();
        assert_eq!(json, "\"Too much nesting\"");
        let back: RunError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RunError::TooMuchNesting);
        assert!(serde_json::from_str::<RunError>("\"boom\"").is_err());
    }
}
