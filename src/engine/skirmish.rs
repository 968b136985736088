//! The skirmish layer: a bounded run of confrontations scored by
//! accumulated pressure.
//!
//! A skirmish plays hands until the configured count is reached or a side
//! runs out of cards entirely (hand refills from discard are automatic and
//! do not end anything). Once complete the record is frozen; the winner is
//! read off by comparing the player's pressure total against the war's
//! score-to-beat threshold. The boundary is inclusive: exactly meeting the
//! threshold is a player win.
//!
//! Between skirmishes every card on the table is merged, reshuffled, and
//! re-split into two fresh hands. That hand-off is where the
//! deck-conservation invariant is easiest to break, so it is asserted.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Card, Deck, EngineConfig, EngineRng, Holdings, Result, Side, SideMap};

use super::confrontation::resolve_confrontation;
use super::pressure::pressure_deltas;
use super::Outcome;

/// One hand's resolved record: the confrontation plus its scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandRecord {
    /// Who took the stake, or `Tie` for an unresolved war chain.
    pub result: Outcome,

    /// The face-up pair that opened the confrontation.
    pub opening: SideMap<Card>,

    /// The final deciding pair (equals `opening` when no war was fought).
    pub deciding: SideMap<Card>,

    /// War rounds fought within the hand.
    pub war_rounds: u32,

    /// Total cards staked.
    pub stake: u32,

    /// Signed pressure awarded to each side.
    pub deltas: SideMap<i64>,
}

/// A bounded sequence of confrontations with accumulated pressure totals.
///
/// Mutated only by [`Skirmish::play_hand`]; immutable once
/// [`Skirmish::is_complete`] returns true.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skirmish {
    hands_played: u32,
    pressure: SideMap<i64>,
    complete: bool,
    history: Vector<HandRecord>,
}

impl Skirmish {
    /// Start a fresh skirmish.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands resolved so far.
    #[must_use]
    pub fn hands_played(&self) -> u32 {
        self.hands_played
    }

    /// Accumulated pressure for one side.
    #[must_use]
    pub fn pressure(&self, side: Side) -> i64 {
        self.pressure[side]
    }

    /// Both pressure totals.
    #[must_use]
    pub fn pressure_totals(&self) -> &SideMap<i64> {
        &self.pressure
    }

    /// True once the skirmish has ended (hand count reached or a side
    /// exhausted).
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Every hand resolved in this skirmish, in order.
    #[must_use]
    pub fn history(&self) -> &Vector<HandRecord> {
        &self.history
    }

    /// Draw and resolve one confrontation, accumulate its pressure, and
    /// append it to the history.
    ///
    /// Errors from the resolver (a side exhausted before the first draw)
    /// pass through untouched; the campaign layer turns them into the
    /// end-of-game signal.
    pub fn play_hand(
        &mut self,
        config: &EngineConfig,
        holdings: &mut SideMap<Holdings>,
        rng: &mut EngineRng,
    ) -> Result<HandRecord> {
        assert!(!self.complete, "hand played into a completed skirmish");

        let confrontation = resolve_confrontation(holdings, rng)?;
        let deltas = match confrontation.result {
            // Score the final deciding pair, not the original tied pair
            Outcome::Winner(_) => pressure_deltas(config, &confrontation.deciding),
            Outcome::Tie => SideMap::with_value(0),
        };

        let record = HandRecord {
            result: confrontation.result,
            opening: confrontation.opening,
            deciding: confrontation.deciding,
            war_rounds: confrontation.war_rounds,
            stake: confrontation.stake,
            deltas: deltas.clone(),
        };

        for side in Side::ALL {
            self.pressure[side] += deltas[side];
        }
        self.hands_played += 1;
        self.history.push_back(record.clone());

        if self.hands_played >= config.hands_per_skirmish
            || Side::ALL.iter().any(|&s| holdings[s].is_exhausted())
        {
            self.complete = true;
        }

        Ok(record)
    }

    /// Decide the winner against the war's threshold. The boundary is
    /// inclusive: pressure exactly equal to the threshold favors the
    /// player.
    #[must_use]
    pub fn decide(&self, threshold: i64) -> Side {
        debug_assert!(threshold > 0, "threshold must be positive");

        if self.pressure[Side::Player] >= threshold {
            Side::Player
        } else {
            Side::Opponent
        }
    }
}

/// Merge every card on the table, reshuffle, and deal two fresh hands for
/// the next skirmish.
///
/// This is the conservation hand-off: the pool must hold every card that
/// entered the game, and the split returns all of them.
pub fn redeal(holdings: &mut SideMap<Holdings>, rng: &mut EngineRng) -> Result<()> {
    let before = holdings[Side::Player].total() + holdings[Side::Opponent].total();

    let mut pool = Deck::new();
    let (player, opponent) = holdings.both_mut();
    pool.extend(player.take_all());
    pool.extend(opponent.take_all());
    pool.shuffle(rng);

    let (first, second) = pool.split()?;
    assert_eq!(first.len() + second.len(), before, "redeal lost cards");

    *holdings = SideMap::new(Holdings::with_hand(first), Holdings::with_hand(second));
    Ok(())
}
