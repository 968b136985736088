//! Confrontation resolution, including the tie-escalation "war" protocol.
//!
//! One confrontation compares the top card of each side. Differing ranks
//! resolve immediately: the winner collects both cards into its discard
//! reserve, own card first. Equal ranks declare a war: each side antes two
//! face-down cards and reveals a third face-up, and the new face-up pair
//! is compared with the whole accumulated chain at stake. The chain is
//! driven by a loop over an explicit stake pool, never by recursion, so an
//! arbitrarily long run of ties cannot grow the stack.
//!
//! A side that cannot fund a war round (fewer than 3 cards across hand and
//! discard) ends the chain as an unresolved tie: each side takes its own
//! contributed stake back into its own discard. Both sides always
//! contribute the same number of cards per round, so this is the even
//! split of the stake.

use smallvec::SmallVec;

use crate::core::{Card, EngineError, EngineRng, Holdings, Result, Side, SideMap};

use super::Outcome;

/// Face-down cards each side antes per war round.
const WAR_FACE_DOWN: usize = 2;

/// Cards a side needs to fund a war round: the ante plus one face-up.
const WAR_MIN_CARDS: usize = WAR_FACE_DOWN + 1;

/// One resolved (or tied-out) confrontation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confrontation {
    /// Who took the stake; `Tie` when an under-resourced war chain ended
    /// unresolved.
    pub result: Outcome,

    /// The initial face-up pair that opened the confrontation.
    pub opening: SideMap<Card>,

    /// The final deciding face-up pair. Equals `opening` when no war was
    /// fought; on an unresolved tie it is the last tied pair.
    pub deciding: SideMap<Card>,

    /// War rounds fought (0 for an immediate resolution).
    pub war_rounds: u32,

    /// Total cards staked across both sides.
    pub stake: u32,
}

/// Resolve exactly one confrontation between the two sides.
///
/// Fails with [`EngineError::InsufficientCards`] if either side is fully
/// exhausted before the first draw; callers treat that as end-of-game,
/// never as a war-escalation failure (the narrower in-chain shortage is
/// handled by the tie fallback, not an error).
pub fn resolve_confrontation(
    holdings: &mut SideMap<Holdings>,
    rng: &mut EngineRng,
) -> Result<Confrontation> {
    for side in Side::ALL {
        if holdings[side].is_exhausted() {
            return Err(EngineError::InsufficientCards { side });
        }
    }

    // Per-side stake pools, in draw order. Chains beyond two rounds are
    // rare; 8 covers the common case inline.
    let mut stakes: SideMap<SmallVec<[Card; 8]>> = SideMap::with_value(SmallVec::new());

    let mut current = draw_pair(holdings, rng)?;
    let opening = current.clone();
    stakes[Side::Player].push(current[Side::Player]);
    stakes[Side::Opponent].push(current[Side::Opponent]);

    let mut war_rounds = 0u32;

    loop {
        let player_value = current[Side::Player].value();
        let opponent_value = current[Side::Opponent].value();

        if player_value != opponent_value {
            let winner = if player_value > opponent_value {
                Side::Player
            } else {
                Side::Opponent
            };
            let stake = collect_stake(holdings, &mut stakes, winner);

            return Ok(Confrontation {
                result: Outcome::Winner(winner),
                opening,
                deciding: current,
                war_rounds,
                stake,
            });
        }

        // War declared. Either side unable to fund the round ends the
        // chain as an unresolved tie with the stake handed back.
        if Side::ALL.iter().any(|&s| holdings[s].total() < WAR_MIN_CARDS) {
            let stake = return_stake(holdings, &mut stakes);

            return Ok(Confrontation {
                result: Outcome::Tie,
                opening,
                deciding: current,
                war_rounds,
                stake,
            });
        }

        for side in Side::ALL {
            for _ in 0..WAR_FACE_DOWN {
                // total() >= WAR_MIN_CARDS makes these draws infallible
                let Some(card) = holdings[side].draw(rng) else {
                    return Err(EngineError::InsufficientCards { side });
                };
                stakes[side].push(card);
            }
        }

        current = draw_pair(holdings, rng)?;
        stakes[Side::Player].push(current[Side::Player]);
        stakes[Side::Opponent].push(current[Side::Opponent]);
        war_rounds += 1;
    }
}

fn draw_pair(holdings: &mut SideMap<Holdings>, rng: &mut EngineRng) -> Result<SideMap<Card>> {
    let Some(player) = holdings[Side::Player].draw(rng) else {
        return Err(EngineError::InsufficientCards { side: Side::Player });
    };
    let Some(opponent) = holdings[Side::Opponent].draw(rng) else {
        return Err(EngineError::InsufficientCards { side: Side::Opponent });
    };
    Ok(SideMap::new(player, opponent))
}

/// Winner collects the whole stake into its discard, own cards first.
fn collect_stake(
    holdings: &mut SideMap<Holdings>,
    stakes: &mut SideMap<SmallVec<[Card; 8]>>,
    winner: Side,
) -> u32 {
    let stake = (stakes[Side::Player].len() + stakes[Side::Opponent].len()) as u32;
    let own: SmallVec<[Card; 8]> = std::mem::take(&mut stakes[winner]);
    let theirs: SmallVec<[Card; 8]> = std::mem::take(&mut stakes[winner.opposite()]);

    holdings[winner].collect(own);
    holdings[winner].collect(theirs);
    stake
}

/// Unresolved tie: each side takes its own contributions back.
fn return_stake(holdings: &mut SideMap<Holdings>, stakes: &mut SideMap<SmallVec<[Card; 8]>>) -> u32 {
    let stake = (stakes[Side::Player].len() + stakes[Side::Opponent].len()) as u32;
    for side in Side::ALL {
        let own: SmallVec<[Card; 8]> = std::mem::take(&mut stakes[side]);
        holdings[side].collect(own);
    }
    stake
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Deck, Rank, Suit};

    fn holdings_from(player: Vec<Card>, opponent: Vec<Card>) -> SideMap<Holdings> {
        SideMap::new(
            Holdings::with_hand(Deck::from(player)),
            Holdings::with_hand(Deck::from(opponent)),
        )
    }

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    fn total_cards(holdings: &SideMap<Holdings>) -> usize {
        holdings[Side::Player].total() + holdings[Side::Opponent].total()
    }

    #[test]
    fn test_simple_win_goes_to_discard_own_first() {
        let mut holdings = holdings_from(
            vec![card(Rank::King, Suit::Hearts)],
            vec![card(Rank::Three, Suit::Clubs)],
        );
        let mut rng = EngineRng::new(42);

        let outcome = resolve_confrontation(&mut holdings, &mut rng).unwrap();

        assert_eq!(outcome.result, Outcome::Winner(Side::Player));
        assert_eq!(outcome.war_rounds, 0);
        assert_eq!(outcome.stake, 2);
        assert_eq!(outcome.opening, outcome.deciding);

        // Winner's card first, then the opponent's, in the discard
        assert!(holdings[Side::Player].hand.is_empty());
        assert_eq!(
            holdings[Side::Player].discard.cards(),
            &[card(Rank::King, Suit::Hearts), card(Rank::Three, Suit::Clubs)]
        );
        assert!(holdings[Side::Opponent].is_exhausted());
    }

    #[test]
    fn test_war_escalation_collects_eight_cards() {
        // 7 vs 7 opens a war; each side antes 2 face-down and flips
        // 1 face-up; the face-up winner takes all 8 cards.
        let mut holdings = holdings_from(
            vec![
                card(Rank::Seven, Suit::Hearts),
                card(Rank::Two, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::King, Suit::Hearts),
            ],
            vec![
                card(Rank::Seven, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
                card(Rank::Nine, Suit::Clubs),
            ],
        );
        let mut rng = EngineRng::new(42);

        let outcome = resolve_confrontation(&mut holdings, &mut rng).unwrap();

        assert_eq!(outcome.result, Outcome::Winner(Side::Player));
        assert_eq!(outcome.war_rounds, 1);
        assert_eq!(outcome.stake, 8);
        assert_eq!(
            outcome.deciding,
            SideMap::new(card(Rank::King, Suit::Hearts), card(Rank::Nine, Suit::Clubs))
        );

        assert_eq!(holdings[Side::Player].total(), 8);
        assert!(holdings[Side::Opponent].is_exhausted());
    }

    #[test]
    fn test_under_resourced_war_falls_back_to_tie() {
        // Opponent has only 2 cards after the opening draw: the war
        // cannot be funded, so the chain ends unresolved and each side
        // recovers its own card.
        let mut holdings = holdings_from(
            vec![
                card(Rank::Seven, Suit::Hearts),
                card(Rank::Two, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::King, Suit::Hearts),
            ],
            vec![card(Rank::Seven, Suit::Clubs), card(Rank::Four, Suit::Clubs)],
        );
        let mut rng = EngineRng::new(42);
        let before = total_cards(&holdings);

        let outcome = resolve_confrontation(&mut holdings, &mut rng).unwrap();

        assert_eq!(outcome.result, Outcome::Tie);
        assert_eq!(outcome.war_rounds, 0);
        assert_eq!(outcome.stake, 2);
        assert_eq!(total_cards(&holdings), before);
        assert_eq!(holdings[Side::Player].total(), 4);
        assert_eq!(holdings[Side::Opponent].total(), 2);
        assert_eq!(
            holdings[Side::Player].discard.cards(),
            &[card(Rank::Seven, Suit::Hearts)]
        );
    }

    #[test]
    fn test_chained_war_resolves_iteratively() {
        // Two consecutive tied pairs before the decider: 7=7, then 3=3,
        // then K beats 9. Stake is 2 + 6 + 6 = 14 cards.
        let mut holdings = holdings_from(
            vec![
                card(Rank::Seven, Suit::Hearts),
                card(Rank::Two, Suit::Hearts),
                card(Rank::Four, Suit::Hearts),
                card(Rank::Three, Suit::Hearts),
                card(Rank::Five, Suit::Hearts),
                card(Rank::Six, Suit::Hearts),
                card(Rank::King, Suit::Hearts),
            ],
            vec![
                card(Rank::Seven, Suit::Clubs),
                card(Rank::Two, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Three, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
                card(Rank::Six, Suit::Clubs),
                card(Rank::Nine, Suit::Clubs),
            ],
        );
        let mut rng = EngineRng::new(42);

        let outcome = resolve_confrontation(&mut holdings, &mut rng).unwrap();

        assert_eq!(outcome.result, Outcome::Winner(Side::Player));
        assert_eq!(outcome.war_rounds, 2);
        assert_eq!(outcome.stake, 14);
        assert_eq!(holdings[Side::Player].total(), 14);
        assert!(holdings[Side::Opponent].is_exhausted());
    }

    #[test]
    fn test_war_draws_refill_from_discard() {
        // Player's hand holds only the tied card, but the discard can
        // fund the war; the reshuffle is automatic.
        let mut holdings = holdings_from(
            vec![card(Rank::Seven, Suit::Hearts)],
            vec![
                card(Rank::Seven, Suit::Clubs),
                card(Rank::Four, Suit::Clubs),
                card(Rank::Five, Suit::Clubs),
                card(Rank::Six, Suit::Clubs),
            ],
        );
        holdings[Side::Player].collect([
            card(Rank::Two, Suit::Hearts),
            card(Rank::Three, Suit::Hearts),
            card(Rank::Ace, Suit::Hearts),
        ]);
        let mut rng = EngineRng::new(42);
        let before = total_cards(&holdings);

        let outcome = resolve_confrontation(&mut holdings, &mut rng).unwrap();

        // Whatever the shuffled face-up order, every card is accounted for
        assert_eq!(total_cards(&holdings), before);
        assert_eq!(outcome.stake, 8);
    }

    #[test]
    fn test_exhausted_side_is_an_error() {
        let mut holdings = holdings_from(vec![card(Rank::King, Suit::Hearts)], vec![]);
        let mut rng = EngineRng::new(42);

        let err = resolve_confrontation(&mut holdings, &mut rng).unwrap_err();
        assert_eq!(err, EngineError::InsufficientCards { side: Side::Opponent });
    }

    #[test]
    fn test_conservation_across_many_resolutions() {
        let deck = Deck::standard(&Rank::ALL, &Suit::ALL).unwrap();
        let mut shuffled = deck;
        let mut rng = EngineRng::new(7);
        shuffled.shuffle(&mut rng);
        let (a, b) = shuffled.split().unwrap();
        let mut holdings = SideMap::new(Holdings::with_hand(a), Holdings::with_hand(b));

        for _ in 0..200 {
            if Side::ALL.iter().any(|&s| holdings[s].is_exhausted()) {
                break;
            }
            resolve_confrontation(&mut holdings, &mut rng).unwrap();
            assert_eq!(total_cards(&holdings), 52);
        }
    }
}
