//! Card types.

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    /// All four suits.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All thirteen ranks, Ace first.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the base blackjack value of the rank.
    ///
    /// Aces count as 1 here; the hand evaluator decides whether one of them
    /// is promoted to 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
            Self::Seven => 7,
            Self::Eight => 8,
            Self::Nine => 9,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
        }
    }

    /// Returns whether this rank is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Ace)
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

/// Number of cards in a standard deck (no jokers).
pub const DECK_SIZE: usize = 52;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_cards_are_worth_ten() {
        for rank in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(rank.value(), 10);
        }
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::Seven.value(), 7);
    }

    #[test]
    fn equality_needs_suit_and_rank() {
        let ace = Card::new(Suit::Spades, Rank::Ace);
        assert_eq!(ace, Card::new(Suit::Spades, Rank::Ace));
        assert_ne!(ace, Card::new(Suit::Hearts, Rank::Ace));
        assert_ne!(ace, Card::new(Suit::Spades, Rank::King));
    }
}
