//! Engine error taxonomy.
//!
//! Three classes of failure, matching how they are handled:
//! - [`EngineError::Config`] is fatal at construction and prevents the
//!   engine from being created.
//! - [`EngineError::EmptyDeck`] and [`EngineError::InsufficientCards`] mean
//!   an operation needed cards that are not available. The skirmish layer
//!   recovers locally (reshuffle from discard) when it can; when both hand
//!   and discard are empty the error surfaces as the end-of-game signal.
//!
//! Invariant violations (broken deck conservation, a non-positive computed
//! threshold) are programming errors, not game states; those are asserts,
//! not variants here.

use thiserror::Error;

use super::side::Side;

/// Errors surfaced by the engine API.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Invalid engine configuration. The engine cannot be constructed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// An operation required a non-empty deck.
    #[error("deck is empty")]
    EmptyDeck,

    /// A side had no cards (hand and discard both empty) when a
    /// confrontation had to begin. Callers treat this as end-of-game.
    #[error("{side} has no cards left to play")]
    InsufficientCards { side: Side },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = EngineError::Config("rank set is empty".into());
        assert_eq!(format!("{}", err), "invalid configuration: rank set is empty");

        let err = EngineError::InsufficientCards { side: Side::Opponent };
        assert_eq!(format!("{}", err), "opponent has no cards left to play");

        assert_eq!(format!("{}", EngineError::EmptyDeck), "deck is empty");
    }
}
