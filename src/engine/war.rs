//! The war layer: a fixed run of skirmishes with an escalating threshold.
//!
//! Each war carries its own score-to-beat, derived from the war number:
//! linear for the first four wars, exponential after. Skirmish wins are
//! tallied per side; the higher tally wins the war and equal tallies are
//! a tie — a distinct, valid terminal outcome at this level, unlike the
//! skirmish boundary which always names a winner.

use serde::{Deserialize, Serialize};

use crate::core::{Side, SideMap};

use super::Outcome;

/// Pressure threshold a skirmish must reach in war `war_number`.
///
/// Linear growth (`base_score * n`) through war 4, then
/// `floor(base_score * 1.5^(n-1))`. Pure and total for every positive war
/// number; saturates at `i64::MAX` rather than overflowing.
///
/// ```
/// use war_engine::engine::score_to_beat;
///
/// assert_eq!(score_to_beat(10, 1), 10);
/// assert_eq!(score_to_beat(10, 4), 40);
/// assert_eq!(score_to_beat(10, 5), 50); // floor(10 * 1.5^4)
/// ```
#[must_use]
pub fn score_to_beat(base_score: i64, war_number: u32) -> i64 {
    debug_assert!(base_score > 0, "base_score must be positive");
    debug_assert!(war_number >= 1, "war numbering starts at 1");

    if war_number <= 4 {
        base_score.saturating_mul(i64::from(war_number))
    } else {
        let scaled = base_score as f64 * 1.5f64.powi(war_number as i32 - 1);
        if scaled >= i64::MAX as f64 {
            i64::MAX
        } else {
            scaled.floor() as i64
        }
    }
}

/// A bounded sequence of skirmishes and their win tallies.
///
/// Mutated only by [`War::record_skirmish`]; immutable once decided.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct War {
    /// 1-based war number within the campaign.
    number: u32,

    /// Skirmishes decided so far.
    skirmishes_played: u32,

    /// Skirmish wins per side.
    wins: SideMap<u32>,

    /// Threshold every skirmish in this war is judged against.
    score_to_beat: i64,
}

impl War {
    /// Open war `number` with its derived threshold.
    #[must_use]
    pub fn new(base_score: i64, number: u32) -> Self {
        let threshold = score_to_beat(base_score, number);
        assert!(threshold > 0, "computed threshold must be positive");

        Self {
            number,
            skirmishes_played: 0,
            wins: SideMap::with_value(0),
            score_to_beat: threshold,
        }
    }

    /// 1-based war number.
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Skirmishes decided so far.
    #[must_use]
    pub fn skirmishes_played(&self) -> u32 {
        self.skirmishes_played
    }

    /// Skirmish wins for one side.
    #[must_use]
    pub fn wins(&self, side: Side) -> u32 {
        self.wins[side]
    }

    /// This war's threshold.
    #[must_use]
    pub fn score_to_beat(&self) -> i64 {
        self.score_to_beat
    }

    /// Tally one decided skirmish.
    pub fn record_skirmish(&mut self, winner: Side) {
        self.wins[winner] += 1;
        self.skirmishes_played += 1;
    }

    /// True once the configured number of skirmishes has been decided.
    #[must_use]
    pub fn is_complete(&self, skirmishes_per_war: u32) -> bool {
        self.skirmishes_played >= skirmishes_per_war
    }

    /// Decide the war from the tallies: higher count wins, equal counts
    /// tie.
    #[must_use]
    pub fn decide(&self) -> Outcome {
        use std::cmp::Ordering;

        match self.wins[Side::Player].cmp(&self.wins[Side::Opponent]) {
            Ordering::Greater => Outcome::Winner(Side::Player),
            Ordering::Less => Outcome::Winner(Side::Opponent),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_to_beat_linear_range() {
        assert_eq!(score_to_beat(10, 1), 10);
        assert_eq!(score_to_beat(10, 2), 20);
        assert_eq!(score_to_beat(10, 3), 30);
        assert_eq!(score_to_beat(10, 4), 40);
    }

    #[test]
    fn test_score_to_beat_exponential_range() {
        assert_eq!(score_to_beat(10, 5), 50); // floor(10 * 5.0625)
        assert_eq!(score_to_beat(10, 6), 75); // floor(10 * 7.59375)
        assert_eq!(score_to_beat(10, 7), 113); // floor(10 * 11.390625)
    }

    #[test]
    fn test_score_to_beat_monotone() {
        let mut previous = 0;
        for n in 1..=60 {
            let threshold = score_to_beat(10, n);
            assert!(
                threshold >= previous,
                "threshold decreased at war {}: {} < {}",
                n,
                threshold,
                previous
            );
            previous = threshold;
        }
    }

    #[test]
    fn test_score_to_beat_saturates() {
        // 1.5^999 is far beyond i64; the threshold pins at the maximum
        assert_eq!(score_to_beat(10, 1000), i64::MAX);
    }

    #[test]
    fn test_war_decides_by_majority() {
        let mut war = War::new(10, 1);
        war.record_skirmish(Side::Player);
        war.record_skirmish(Side::Opponent);
        war.record_skirmish(Side::Player);

        assert!(war.is_complete(3));
        assert_eq!(war.decide(), Outcome::Winner(Side::Player));
        assert_eq!(war.wins(Side::Player), 2);
        assert_eq!(war.wins(Side::Opponent), 1);
    }

    #[test]
    fn test_war_tie_on_equal_wins() {
        let mut war = War::new(10, 3);
        war.record_skirmish(Side::Player);
        war.record_skirmish(Side::Opponent);

        assert_eq!(war.decide(), Outcome::Tie);
    }

    #[test]
    fn test_war_threshold_follows_number() {
        assert_eq!(War::new(10, 1).score_to_beat(), 10);
        assert_eq!(War::new(10, 5).score_to_beat(), 50);
        assert_eq!(War::new(20, 2).score_to_beat(), 40);
    }

    #[test]
    fn test_war_serde() {
        let mut war = War::new(10, 2);
        war.record_skirmish(Side::Opponent);

        let json = serde_json::to_string(&war).unwrap();
        let back: War = serde_json::from_str(&json).unwrap();
        assert_eq!(war, back);
    }
}
