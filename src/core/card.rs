//! Card value types: ranks, suits, and the card itself.
//!
//! ## Rank
//!
//! Thirteen ordinals from Two to Ace. `value()` maps to 2..=14 for
//! comparison; Ace is highest.
//!
//! ## Suit
//!
//! Four suits carrying two relations:
//! - a fixed rank order (Hearts > Diamonds > Clubs > Spades) used by the
//!   linear advantage formula
//! - a cyclic dominance relation (Hearts → Diamonds → Clubs → Spades →
//!   Hearts) used by the multiplier formula: each suit dominates the next
//!   in the cycle and is dominated by its predecessor; suits two steps
//!   apart are neutral, as is a suit against itself.

use serde::{Deserialize, Serialize};

/// Card rank, Two lowest, Ace highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All thirteen ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Numeric value for comparison: 2 for Two through 14 for Ace.
    #[must_use]
    pub const fn value(self) -> i64 {
        self as i64 + 2
    }

    /// Short label ("2".."10", "J", "Q", "K", "A").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How one suit relates to another in the dominance cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SuitRelation {
    /// This suit dominates the other (multiplier 1.5).
    Dominates,
    /// This suit is dominated by the other (multiplier 0.5).
    Dominated,
    /// Same suit or opposite in the cycle (multiplier 1.0).
    Neutral,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All four suits in descending rank order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Fixed suit rank: Hearts 4, Diamonds 3, Clubs 2, Spades 1.
    #[must_use]
    pub const fn rank_value(self) -> i64 {
        match self {
            Suit::Hearts => 4,
            Suit::Diamonds => 3,
            Suit::Clubs => 2,
            Suit::Spades => 1,
        }
    }

    /// The suit this one dominates in the cycle.
    #[must_use]
    pub const fn dominates(self) -> Suit {
        match self {
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
            Suit::Spades => Suit::Hearts,
        }
    }

    /// Relation of `self` to `other` in the dominance cycle.
    #[must_use]
    pub fn relation_to(self, other: Suit) -> SuitRelation {
        if self.dominates() == other {
            SuitRelation::Dominates
        } else if other.dominates() == self {
            SuitRelation::Dominated
        } else {
            SuitRelation::Neutral
        }
    }

    /// Unicode symbol for display.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card. Pure value type: two cards with the same rank and suit
/// are interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank comparison value (2..=14).
    #[must_use]
    pub const fn value(self) -> i64 {
        self.rank.value()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Jack.value(), 11);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Two < Rank::Three);

        // Ordering agrees with value()
        for pair in Rank::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].value() < pair[1].value());
        }
    }

    #[test]
    fn test_suit_rank_order() {
        assert_eq!(Suit::Hearts.rank_value(), 4);
        assert_eq!(Suit::Spades.rank_value(), 1);
        assert!(Suit::Hearts.rank_value() > Suit::Diamonds.rank_value());
    }

    #[test]
    fn test_suit_cycle_is_closed() {
        // Following the cycle four times returns to the start
        for suit in Suit::ALL {
            let mut s = suit;
            for _ in 0..4 {
                s = s.dominates();
            }
            assert_eq!(s, suit);
        }
    }

    #[test]
    fn test_suit_relations() {
        assert_eq!(Suit::Hearts.relation_to(Suit::Diamonds), SuitRelation::Dominates);
        assert_eq!(Suit::Diamonds.relation_to(Suit::Hearts), SuitRelation::Dominated);
        // Opposite in the cycle: neutral
        assert_eq!(Suit::Hearts.relation_to(Suit::Clubs), SuitRelation::Neutral);
        // Same suit: neutral
        assert_eq!(Suit::Spades.relation_to(Suit::Spades), SuitRelation::Neutral);
        // The cycle wraps
        assert_eq!(Suit::Spades.relation_to(Suit::Hearts), SuitRelation::Dominates);
    }

    #[test]
    fn test_card_display() {
        let card = Card::new(Rank::Queen, Suit::Hearts);
        assert_eq!(format!("{}", card), "Q♥");
    }

    #[test]
    fn test_card_is_value_type() {
        let a = Card::new(Rank::Seven, Suit::Clubs);
        let b = Card::new(Rank::Seven, Suit::Clubs);
        assert_eq!(a, b);
    }

    #[test]
    fn test_card_serde() {
        let card = Card::new(Rank::Ace, Suit::Spades);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
