//! Engine configuration.
//!
//! All tunable policy lives here: which ranks and suits are in play, how
//! long skirmishes and wars run, and the scoring constants. The config is
//! validated once at engine construction; a validated config never changes
//! for the lifetime of a session, and it travels inside snapshots so a
//! resumed game keeps the exact same rules.

use serde::{Deserialize, Serialize};

use super::card::{Rank, Suit};
use super::error::{EngineError, Result};

/// Which pressure formula scores resolved confrontations.
///
/// Selected once per session and never mixed mid-session. See
/// [`crate::engine::pressure`] for the formulas themselves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureFormula {
    /// Canonical mode: |rank difference| x rank weight, modulated by the
    /// suit dominance cycle, floored at the minimum pressure.
    #[default]
    SuitMultiplier,
    /// Legacy mode: (rank difference x 2) + suit rank difference, signed.
    RankSuitLinear,
}

/// Complete engine configuration.
///
/// `EngineConfig::default()` is the full 52-card game with the observed
/// constants: 26 hands per skirmish, 3 skirmishes per war, base score 10,
/// rank weight 10, minimum pressure 5.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Ranks in play. Defaults to all thirteen.
    pub ranks: Vec<Rank>,

    /// Suits in play. Defaults to all four.
    pub suits: Vec<Suit>,

    /// Confrontations per skirmish.
    pub hands_per_skirmish: u32,

    /// Skirmishes per war.
    pub skirmishes_per_war: u32,

    /// Base for the escalating score-to-beat threshold.
    pub base_score: i64,

    /// Pressure awarded per point of rank difference (SuitMultiplier mode).
    pub rank_weight: i64,

    /// A win always awards at least this much pressure (SuitMultiplier
    /// mode), so every resolved hand moves the score.
    pub min_pressure: i64,

    /// Scoring formula for the session.
    pub formula: PressureFormula,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            ranks: Rank::ALL.to_vec(),
            suits: Suit::ALL.to_vec(),
            hands_per_skirmish: 26,
            skirmishes_per_war: 3,
            base_score: 10,
            rank_weight: 10,
            min_pressure: 5,
            formula: PressureFormula::default(),
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the rank set.
    #[must_use]
    pub fn with_ranks(mut self, ranks: Vec<Rank>) -> Self {
        self.ranks = ranks;
        self
    }

    /// Restrict the suit set.
    #[must_use]
    pub fn with_suits(mut self, suits: Vec<Suit>) -> Self {
        self.suits = suits;
        self
    }

    /// Set confrontations per skirmish.
    #[must_use]
    pub fn with_hands_per_skirmish(mut self, hands: u32) -> Self {
        self.hands_per_skirmish = hands;
        self
    }

    /// Set skirmishes per war.
    #[must_use]
    pub fn with_skirmishes_per_war(mut self, skirmishes: u32) -> Self {
        self.skirmishes_per_war = skirmishes;
        self
    }

    /// Set the threshold base score.
    #[must_use]
    pub fn with_base_score(mut self, base: i64) -> Self {
        self.base_score = base;
        self
    }

    /// Set the scoring formula for the session.
    #[must_use]
    pub fn with_formula(mut self, formula: PressureFormula) -> Self {
        self.formula = formula;
        self
    }

    /// Deck size implied by the rank and suit sets.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.ranks.len() * self.suits.len()
    }

    /// Validate the configuration. Fails with [`EngineError::Config`] on
    /// empty rank/suit sets, zero-length skirmish or war counts, or
    /// non-positive scoring constants.
    pub fn validate(&self) -> Result<()> {
        if self.ranks.is_empty() {
            return Err(EngineError::Config("rank set is empty".into()));
        }
        if self.suits.is_empty() {
            return Err(EngineError::Config("suit set is empty".into()));
        }
        if self.hands_per_skirmish == 0 {
            return Err(EngineError::Config("hands_per_skirmish must be at least 1".into()));
        }
        if self.skirmishes_per_war == 0 {
            return Err(EngineError::Config("skirmishes_per_war must be at least 1".into()));
        }
        if self.base_score <= 0 {
            return Err(EngineError::Config("base_score must be positive".into()));
        }
        if self.rank_weight <= 0 {
            return Err(EngineError::Config("rank_weight must be positive".into()));
        }
        if self.min_pressure < 0 {
            return Err(EngineError::Config("min_pressure must not be negative".into()));
        }
        if self.deck_size() < 2 {
            return Err(EngineError::Config("deck must hold at least 2 cards".into()));
        }
        Ok(())
    }
}
