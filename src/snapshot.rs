//! Self-sufficient engine snapshots.
//!
//! A [`Snapshot`] holds everything needed to resume a session: the
//! validated configuration, both sides' cards, the in-progress skirmish
//! and war, the scoreboard, and the RNG state. Restoring one continues
//! bit-for-bit deterministically — no RNG history is needed, only future
//! randomness depends on the captured state.
//!
//! The persistence layer treats snapshots as opaque: [`Snapshot::to_bytes`]
//! and [`Snapshot::from_bytes`] give it a byte blob to store and hand
//! back. Anything serde-compatible works too; the struct derives
//! `Serialize`/`Deserialize`.

use serde::{Deserialize, Serialize};

use crate::core::{EngineConfig, EngineError, EngineRngState, Holdings, Result, SideMap};
use crate::engine::{Outcome, Scoreboard, Skirmish, War};

/// Complete engine state at a hand boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Session configuration, including the pressure formula, so a resumed
    /// game keeps the exact same rules.
    pub config: EngineConfig,

    /// Both sides' hands and discards.
    pub holdings: SideMap<Holdings>,

    /// RNG state; O(1) regardless of how much randomness was consumed.
    pub rng: EngineRngState,

    /// The skirmish in progress.
    pub skirmish: Skirmish,

    /// The war in progress.
    pub war: War,

    /// Cumulative campaign counters.
    pub scoreboard: Scoreboard,

    /// Final result, when the campaign had already ended.
    pub result: Option<Outcome>,
}

impl Snapshot {
    /// Encode as an opaque byte blob.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self)
            .map_err(|e| EngineError::Config(format!("snapshot encode failed: {e}")))
    }

    /// Decode a blob produced by [`Snapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes)
            .map_err(|e| EngineError::Config(format!("snapshot decode failed: {e}")))
    }
}
