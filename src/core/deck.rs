//! Decks and per-side card holdings.
//!
//! A [`Deck`] is an ordered sequence of cards drawn from the front. Each
//! side of the table owns a [`Holdings`]: the live hand plus the discard
//! reserve that won cards land in. When a hand runs dry the discard is
//! reshuffled back in, so a side is only out of the game once *both* piles
//! are empty.
//!
//! ## Conservation
//!
//! Cards are never created or destroyed after the initial deal: the union
//! of both sides' hands and discards plus any cards staked in an ongoing
//! confrontation always equals the original deck. Layers above rely on
//! this and audit it.

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use super::error::{EngineError, Result};
use super::rng::EngineRng;

/// An ordered sequence of cards. The front (index 0) is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Build every rank x suit combination exactly once.
    ///
    /// The full 52-card deck is `Deck::standard(&Rank::ALL, &Suit::ALL)`;
    /// subsets are allowed for shorter games. Empty rank or suit sets are a
    /// configuration error.
    pub fn standard(ranks: &[Rank], suits: &[Suit]) -> Result<Self> {
        if ranks.is_empty() {
            return Err(EngineError::Config("rank set is empty".into()));
        }
        if suits.is_empty() {
            return Err(EngineError::Config("suit set is empty".into()));
        }

        let cards = suits
            .iter()
            .flat_map(|&suit| ranks.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();

        Ok(Self { cards })
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True if no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The cards in order, top first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Shuffle in place with the caller's RNG. Same seed, same order.
    pub fn shuffle(&mut self, rng: &mut EngineRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Split into two halves of `len / 2`; an odd extra card goes to the
    /// first half.
    pub fn split(mut self) -> Result<(Deck, Deck)> {
        if self.cards.is_empty() {
            return Err(EngineError::EmptyDeck);
        }

        let second = self.cards.split_off(self.cards.len().div_ceil(2));
        Ok((self, Deck { cards: second }))
    }

    /// Draw the top card.
    pub fn draw(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Add a card to the bottom.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Add cards to the bottom in the given order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Move every card out of `other` onto the bottom of this deck.
    pub fn absorb(&mut self, other: &mut Deck) {
        self.cards.append(&mut other.cards);
    }

    /// Remove all cards, returning them in order.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Swap two positions. Returns false (and does nothing) when either
    /// index is out of bounds.
    pub fn swap(&mut self, a: usize, b: usize) -> bool {
        if a < self.cards.len() && b < self.cards.len() {
            self.cards.swap(a, b);
            true
        } else {
            false
        }
    }
}

impl From<Vec<Card>> for Deck {
    fn from(cards: Vec<Card>) -> Self {
        Self { cards }
    }
}

/// One side's cards: the live hand plus the discard reserve.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holdings {
    pub hand: Deck,
    pub discard: Deck,
}

impl Holdings {
    /// Start with a dealt hand and an empty discard.
    #[must_use]
    pub fn with_hand(hand: Deck) -> Self {
        Self {
            hand,
            discard: Deck::new(),
        }
    }

    /// Total card supply, hand plus discard.
    #[must_use]
    pub fn total(&self) -> usize {
        self.hand.len() + self.discard.len()
    }

    /// True when both hand and discard are empty: this side cannot play.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.hand.is_empty() && self.discard.is_empty()
    }

    /// Draw from the hand, reshuffling the discard back into the hand
    /// first if the hand is empty. Returns `None` only when the side is
    /// fully exhausted.
    pub fn draw(&mut self, rng: &mut EngineRng) -> Option<Card> {
        if self.hand.is_empty() && !self.discard.is_empty() {
            self.hand.absorb(&mut self.discard);
            self.hand.shuffle(rng);
        }
        self.hand.draw()
    }

    /// Put won cards into the discard reserve.
    pub fn collect(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.discard.extend(cards);
    }

    /// Empty both piles, returning every card (hand first).
    pub fn take_all(&mut self) -> Vec<Card> {
        let mut cards = self.hand.take_all();
        cards.append(&mut self.discard.take_all());
        cards
    }
}
