//! Core value types: cards, decks, sides, RNG, configuration, errors.
//!
//! Everything above this module (the engine layers) is policy; this module
//! is the vocabulary those layers speak.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;
pub mod side;

pub use card::{Card, Rank, Suit, SuitRelation};
pub use config::{EngineConfig, PressureFormula};
pub use deck::{Deck, Holdings};
pub use error::{EngineError, Result};
pub use rng::{EngineRng, EngineRngState};
pub use side::{Side, SideMap};
