//! The campaign layer: the engine facade that drives wars indefinitely.
//!
//! [`Engine::advance`] plays exactly one confrontation and cascades every
//! boundary it crosses: skirmish decided, war decided, campaign finished.
//! The caller sees all of it in the returned [`HandOutcome`], so a UI can
//! narrate each layer without reaching into engine state.
//!
//! The campaign ends when a side's whole supply (hand plus discard) is
//! gone and cannot be replenished. That is the authoritative end-of-game
//! condition, distinct from any single skirmish or war ending; the final
//! result compares cumulative war scores.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    Card, Deck, EngineConfig, EngineError, EngineRng, Holdings, Rank, Result, Side, SideMap,
};
use crate::snapshot::Snapshot;

use super::skirmish::{redeal, HandRecord, Skirmish};
use super::war::War;
use super::Outcome;

/// Cumulative campaign counters.
///
/// Updated only by the engine; read-only to everything outside.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Wars decided.
    pub wars_completed: u32,

    /// Skirmishes decided.
    pub skirmishes_completed: u32,

    /// Confrontations resolved.
    pub hands_played: u64,

    /// Cards committed to confrontations (stakes, including war antes).
    pub cards_played: u64,

    /// War score per side.
    pub score: SideMap<u32>,

    /// Tied wars.
    pub ties: u32,

    /// Consecutive war wins by the player, reset on any non-win.
    pub win_streak: u32,

    /// High-water mark of `win_streak`.
    pub longest_win_streak: u32,

    /// Every threshold used so far, in war order.
    pub score_to_beat_history: Vec<i64>,

    rank_plays: FxHashMap<Rank, u64>,
}

impl Scoreboard {
    fn record_hand(&mut self, record: &HandRecord) {
        self.hands_played += 1;
        self.cards_played += u64::from(record.stake);
        for side in Side::ALL {
            *self.rank_plays.entry(record.opening[side].rank).or_insert(0) += 1;
        }
    }

    fn record_war(&mut self, result: Outcome) {
        self.wars_completed += 1;
        match result {
            Outcome::Winner(Side::Player) => {
                self.score[Side::Player] += 1;
                self.win_streak += 1;
                self.longest_win_streak = self.longest_win_streak.max(self.win_streak);
            }
            Outcome::Winner(Side::Opponent) => {
                self.score[Side::Opponent] += 1;
                self.win_streak = 0;
            }
            Outcome::Tie => {
                self.ties += 1;
                self.win_streak = 0;
            }
        }
    }

    /// Final campaign result by cumulative war-score comparison.
    #[must_use]
    pub fn final_result(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.score[Side::Player].cmp(&self.score[Side::Opponent]) {
            Ordering::Greater => Outcome::Winner(Side::Player),
            Ordering::Less => Outcome::Winner(Side::Opponent),
            Ordering::Equal => Outcome::Tie,
        }
    }

    /// Times a rank has been led in an opening pair.
    #[must_use]
    pub fn rank_plays(&self, rank: Rank) -> u64 {
        self.rank_plays.get(&rank).copied().unwrap_or(0)
    }

    /// The most frequently led rank, lowest rank on a count tie. `None`
    /// before any hand has been played.
    #[must_use]
    pub fn most_common_rank(&self) -> Option<Rank> {
        self.rank_plays
            .iter()
            .map(|(&rank, &count)| (rank, count))
            .max_by_key(|&(rank, count)| (count, std::cmp::Reverse(rank)))
            .map(|(rank, _)| rank)
    }
}

/// A decided skirmish, as reported at its boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkirmishSummary {
    /// Skirmish winner (the inclusive threshold rule always names one).
    pub winner: Side,

    /// Final pressure totals.
    pub pressure: SideMap<i64>,

    /// Threshold the skirmish was judged against.
    pub threshold: i64,

    /// Hands the skirmish ran.
    pub hands_played: u32,
}

/// A decided war, as reported at its boundary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarSummary {
    /// War result; `Tie` on equal skirmish-win counts.
    pub result: Outcome,

    /// Skirmish wins per side.
    pub wins: SideMap<u32>,

    /// 1-based number of the decided war.
    pub number: u32,
}

/// Everything one [`Engine::advance`] call produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandOutcome {
    /// The resolved confrontation and its scoring.
    pub hand: HandRecord,

    /// Present when this hand completed a skirmish.
    pub skirmish: Option<SkirmishSummary>,

    /// Present when this hand completed a war.
    pub war: Option<WarSummary>,

    /// Present when this hand ended the campaign.
    pub final_result: Option<Outcome>,
}

/// The engine: owns the table, drives every layer, and is the only
/// mutation path into them.
#[derive(Clone, Debug)]
pub struct Engine {
    config: EngineConfig,
    holdings: SideMap<Holdings>,
    rng: EngineRng,
    skirmish: Skirmish,
    war: War,
    scoreboard: Scoreboard,
    result: Option<Outcome>,
}

impl Engine {
    /// Build, shuffle, and deal. Fails with [`EngineError::Config`] on an
    /// invalid configuration.
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut rng = EngineRng::new(seed);
        let mut deck = Deck::standard(&config.ranks, &config.suits)?;
        deck.shuffle(&mut rng);
        let (player, opponent) = deck.split()?;

        let war = War::new(config.base_score, 1);
        let scoreboard = Scoreboard {
            score_to_beat_history: vec![war.score_to_beat()],
            ..Scoreboard::default()
        };

        Ok(Self {
            config,
            holdings: SideMap::new(Holdings::with_hand(player), Holdings::with_hand(opponent)),
            rng,
            skirmish: Skirmish::new(),
            war,
            scoreboard,
            result: None,
        })
    }

    // === Accessors ===

    /// The validated session configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Cumulative campaign counters.
    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The skirmish currently in progress.
    #[must_use]
    pub fn skirmish(&self) -> &Skirmish {
        &self.skirmish
    }

    /// The war currently in progress.
    #[must_use]
    pub fn war(&self) -> &War {
        &self.war
    }

    /// One side's hand, top card first.
    #[must_use]
    pub fn hand(&self, side: Side) -> &[Card] {
        self.holdings[side].hand.cards()
    }

    /// One side's total supply (hand plus discard).
    #[must_use]
    pub fn supply(&self, side: Side) -> usize {
        self.holdings[side].total()
    }

    /// Final result, once the campaign has ended.
    #[must_use]
    pub fn result(&self) -> Option<Outcome> {
        self.result
    }

    /// True once the campaign has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    // === Actions ===

    /// Swap two cards in the player's hand before the next draw. Returns
    /// false (and changes nothing) when either index is out of bounds.
    ///
    /// Part of the deterministic action sequence: the same swaps at the
    /// same points reproduce the same game.
    pub fn swap_hand_cards(&mut self, a: usize, b: usize) -> bool {
        self.holdings[Side::Player].hand.swap(a, b)
    }

    /// Advance exactly one confrontation and cascade any boundaries it
    /// crosses.
    ///
    /// Fails with [`EngineError::InsufficientCards`] when called after the
    /// campaign has ended; a live engine only errors if state was
    /// corrupted externally.
    pub fn advance(&mut self) -> Result<HandOutcome> {
        if self.result.is_some() {
            let side = Side::ALL
                .into_iter()
                .find(|&s| self.holdings[s].is_exhausted())
                .unwrap_or(Side::Player);
            return Err(EngineError::InsufficientCards { side });
        }

        let hand = self
            .skirmish
            .play_hand(&self.config, &mut self.holdings, &mut self.rng)?;
        self.scoreboard.record_hand(&hand);
        self.audit_conservation();

        let mut outcome = HandOutcome {
            hand,
            skirmish: None,
            war: None,
            final_result: None,
        };

        if !self.skirmish.is_complete() {
            return Ok(outcome);
        }

        // Skirmish boundary
        let threshold = self.war.score_to_beat();
        let winner = self.skirmish.decide(threshold);
        self.war.record_skirmish(winner);
        self.scoreboard.skirmishes_completed += 1;
        outcome.skirmish = Some(SkirmishSummary {
            winner,
            pressure: self.skirmish.pressure_totals().clone(),
            threshold,
            hands_played: self.skirmish.hands_played(),
        });

        let exhausted = Side::ALL.iter().any(|&s| self.holdings[s].is_exhausted());
        let war_complete = self.war.is_complete(self.config.skirmishes_per_war);

        if war_complete || exhausted {
            // War boundary; an exhausted table decides the war from the
            // tallies so far
            let result = self.war.decide();
            self.scoreboard.record_war(result);
            outcome.war = Some(WarSummary {
                result,
                wins: SideMap::from_fn(|side| self.war.wins(side)),
                number: self.war.number(),
            });
        }

        if exhausted {
            let final_result = self.scoreboard.final_result();
            self.result = Some(final_result);
            outcome.final_result = Some(final_result);
            return Ok(outcome);
        }

        if war_complete {
            let next_number = self.war.number() + 1;
            self.war = War::new(self.config.base_score, next_number);
            self.scoreboard
                .score_to_beat_history
                .push(self.war.score_to_beat());
        }

        self.skirmish = Skirmish::new();
        redeal(&mut self.holdings, &mut self.rng)?;
        self.audit_conservation();

        Ok(outcome)
    }

    // === Snapshots ===

    /// Capture the complete engine state. The snapshot is self-sufficient:
    /// resuming it continues deterministically without the RNG history.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            config: self.config.clone(),
            holdings: self.holdings.clone(),
            rng: self.rng.state(),
            skirmish: self.skirmish.clone(),
            war: self.war.clone(),
            scoreboard: self.scoreboard.clone(),
            result: self.result,
        }
    }

    /// Rebuild an engine from a snapshot. The embedded configuration is
    /// re-validated and the deck is re-audited against it.
    pub fn resume(snapshot: Snapshot) -> Result<Self> {
        snapshot.config.validate()?;

        let engine = Self {
            rng: EngineRng::from_state(&snapshot.rng),
            config: snapshot.config,
            holdings: snapshot.holdings,
            skirmish: snapshot.skirmish,
            war: snapshot.war,
            scoreboard: snapshot.scoreboard,
            result: snapshot.result,
        };
        engine.audit_conservation();
        Ok(engine)
    }

    /// Deck-conservation invariant: every card dealt is still on the
    /// table. A failure is a logic bug, never a valid game state.
    fn audit_conservation(&self) {
        let total = self.holdings[Side::Player].total() + self.holdings[Side::Opponent].total();
        assert_eq!(total, self.config.deck_size(), "deck conservation violated");
    }
}
