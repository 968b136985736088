//! # war-engine
//!
//! A layered resolution engine for the card game War: single
//! confrontations with recursive-style tie escalation, skirmishes scored
//! by accumulated pressure, wars decided by skirmish tallies, and a
//! campaign loop with an escalating score-to-beat threshold.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: the engine receives a configuration and a seed and
//!    emits outcome records. No files, graphics, audio, or UI focus —
//!    those are external collaborators.
//!
//! 2. **Determinism as correctness**: every random act flows through one
//!    explicit seeded RNG handle. The same seed and the same action
//!    sequence reproduce the same game, bit for bit.
//!
//! 3. **Conservation**: cards are never created or lost after the deal.
//!    The invariant is asserted after every hand, not trusted.
//!
//! 4. **Exclusive ownership**: each layer owns the state one level below
//!    it; records freeze once their layer completes.
//!
//! ## Layers
//!
//! - `core`: cards, decks, sides, RNG, configuration, errors
//! - `engine::pressure`: signed pressure scoring for resolved pairs
//! - `engine::confrontation`: one comparison, wars included
//! - `engine::skirmish`: bounded runs of confrontations vs a threshold
//! - `engine::war`: skirmish tallies and the escalating threshold
//! - `engine::campaign`: the engine facade and scoreboard
//! - `snapshot`: self-sufficient serializable state for save/resume

pub mod core;
pub mod engine;
pub mod snapshot;

// Re-export commonly used types
pub use crate::core::{
    Card, Deck, EngineConfig, EngineError, EngineRng, EngineRngState, Holdings, PressureFormula,
    Rank, Result, Side, SideMap, Suit, SuitRelation,
};

pub use crate::engine::{
    pressure_deltas, resolve_confrontation, score_to_beat, Confrontation, Engine, HandOutcome,
    HandRecord, Outcome, Scoreboard, Skirmish, SkirmishSummary, War, WarSummary,
};

pub use crate::snapshot::Snapshot;
