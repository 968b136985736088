//! Pressure scoring for resolved confrontations.
//!
//! Two formulas exist, selected once per session via
//! [`PressureFormula`](crate::core::PressureFormula) and never mixed:
//!
//! ## SuitMultiplier (canonical)
//!
//! Base pressure is `|rank difference| * rank_weight`. The winner's suit
//! is checked against the loser's in the dominance cycle: 1.5x when the
//! winner's suit dominates, 0.5x when it is dominated, 1.0x otherwise.
//! The scaled value is floored to an integer and clamped up to
//! `min_pressure`, so a win always moves the score. The loser receives
//! the negation of the winner's final (post-multiplier, post-floor)
//! pressure.
//!
//! ## RankSuitLinear (legacy)
//!
//! `(rank difference * 2) + suit rank difference`, signed from the
//! player's perspective; the opponent receives the negation. No floor, no
//! multiplier. The sign can disagree with who took the cards when the
//! suit term outweighs a 1-point rank edge, which is the legacy mode's
//! documented behavior.
//!
//! Under both formulas an equal-rank pair awards zero to both sides: the
//! resolver only scores the final deciding pair of a chain, and a chain
//! that ends on equal ranks is an unresolved tie.

use crate::core::{Card, EngineConfig, PressureFormula, Side, SideMap, SuitRelation};

/// Signed pressure deltas for one resolved comparison.
///
/// `cards[Side::Player]` and `cards[Side::Opponent]` are the deciding
/// face-up pair. Equal ranks yield zero for both sides.
#[must_use]
pub fn pressure_deltas(config: &EngineConfig, cards: &SideMap<Card>) -> SideMap<i64> {
    match config.formula {
        PressureFormula::SuitMultiplier => suit_multiplier(config, cards),
        PressureFormula::RankSuitLinear => rank_suit_linear(cards),
    }
}

fn suit_multiplier(config: &EngineConfig, cards: &SideMap<Card>) -> SideMap<i64> {
    let player = cards[Side::Player];
    let opponent = cards[Side::Opponent];
    let diff = player.value() - opponent.value();

    if diff == 0 {
        return SideMap::with_value(0);
    }

    let (winner, winner_card, loser_card) = if diff > 0 {
        (Side::Player, player, opponent)
    } else {
        (Side::Opponent, opponent, player)
    };

    let base = diff.abs() * config.rank_weight;
    let multiplier = match winner_card.suit.relation_to(loser_card.suit) {
        SuitRelation::Dominates => 1.5,
        SuitRelation::Dominated => 0.5,
        SuitRelation::Neutral => 1.0,
    };
    let pressure = ((base as f64 * multiplier).floor() as i64).max(config.min_pressure);

    let mut deltas = SideMap::with_value(0);
    deltas[winner] = pressure;
    deltas[winner.opposite()] = -pressure;
    deltas
}

fn rank_suit_linear(cards: &SideMap<Card>) -> SideMap<i64> {
    let player = cards[Side::Player];
    let opponent = cards[Side::Opponent];

    if player.rank == opponent.rank {
        return SideMap::with_value(0);
    }

    let rank_diff = player.value() - opponent.value();
    let suit_diff = player.suit.rank_value() - opponent.suit.rank_value();
    let delta = rank_diff * 2 + suit_diff;

    SideMap::new(delta, -delta)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};

    fn pair(player: Card, opponent: Card) -> SideMap<Card> {
        SideMap::new(player, opponent)
    }

    #[test]
    fn test_two_vs_three_neutral_suits() {
        // 2 vs 3 on neutral suits: opponent wins,
        // pressure = max(5, 1 * 10) = 10.
        let config = EngineConfig::default();
        let cards = pair(
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Clubs), // opposite in cycle: neutral
        );

        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Opponent], 10);
        assert_eq!(deltas[Side::Player], -10);
    }

    #[test]
    fn test_minimum_pressure_floor() {
        // Shrink the rank weight so the dominated-suit product lands
        // below the floor and the clamp has to act.
        let mut config = EngineConfig::new();
        config.rank_weight = 4;

        // Winner's Diamonds is dominated by loser's Hearts: 4 * 0.5 = 2,
        // clamped to min_pressure 5.
        let cards = pair(
            Card::new(Rank::Six, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Hearts),
        );

        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 5);
        assert_eq!(deltas[Side::Opponent], -5);
    }

    #[test]
    fn test_suit_dominance_multiplier() {
        let config = EngineConfig::default();

        // Hearts dominates Diamonds: 2 * 10 * 1.5 = 30
        let cards = pair(
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
        );
        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 30);
        assert_eq!(deltas[Side::Opponent], -30);

        // Diamonds dominated by Hearts: 2 * 10 * 0.5 = 10
        let cards = pair(
            Card::new(Rank::Nine, Suit::Diamonds),
            Card::new(Rank::Seven, Suit::Hearts),
        );
        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 10);
    }

    #[test]
    fn test_multiplier_floor_rounds_down() {
        // Weight 5 makes the scaled value fractional: 3 * 5 * 1.5 = 22.5,
        // floored to 22.
        let mut config = EngineConfig::default();
        config.rank_weight = 5;

        let cards = pair(
            Card::new(Rank::Eight, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
        );
        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 22);
    }

    #[test]
    fn test_tie_awards_zero() {
        let config = EngineConfig::default();
        let cards = pair(
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Spades),
        );

        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 0);
        assert_eq!(deltas[Side::Opponent], 0);
    }

    #[test]
    fn test_deltas_are_symmetric() {
        let config = EngineConfig::default();
        for &(pr, ps, or, os) in &[
            (Rank::Ace, Suit::Spades, Rank::Two, Suit::Hearts),
            (Rank::Four, Suit::Clubs, Rank::Jack, Suit::Clubs),
            (Rank::Ten, Suit::Diamonds, Rank::Nine, Suit::Spades),
        ] {
            let cards = pair(Card::new(pr, ps), Card::new(or, os));
            let deltas = pressure_deltas(&config, &cards);
            assert_eq!(deltas[Side::Player], -deltas[Side::Opponent]);
        }
    }

    #[test]
    fn test_rank_suit_linear() {
        let config = EngineConfig::new().with_formula(crate::core::PressureFormula::RankSuitLinear);

        // (9 - 7) * 2 + (hearts 4 - spades 1) = 7
        let cards = pair(
            Card::new(Rank::Nine, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Spades),
        );
        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 7);
        assert_eq!(deltas[Side::Opponent], -7);
    }

    #[test]
    fn test_rank_suit_linear_sign_can_disagree() {
        let config = EngineConfig::new().with_formula(crate::core::PressureFormula::RankSuitLinear);

        // Player wins by one rank but gives up 3 suit points:
        // (1 * 2) + (1 - 4) = -1
        let cards = pair(
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::Seven, Suit::Hearts),
        );
        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], -1);
        assert_eq!(deltas[Side::Opponent], 1);
    }

    #[test]
    fn test_rank_suit_linear_tie_is_zero() {
        let config = EngineConfig::new().with_formula(crate::core::PressureFormula::RankSuitLinear);
        let cards = pair(
            Card::new(Rank::Seven, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Spades),
        );

        let deltas = pressure_deltas(&config, &cards);
        assert_eq!(deltas[Side::Player], 0);
        assert_eq!(deltas[Side::Opponent], 0);
    }
}
