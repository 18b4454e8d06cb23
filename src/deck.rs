//! The single 52-card deck a round deals from.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::EmptyDeckError;

/// An ordered source of cards.
///
/// Cards are stored top-last so that dealing is a `pop`.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a fresh, unshuffled standard deck whose [`shuffle`](Self::shuffle)
    /// is driven by the given seed.
    ///
    /// ```
    /// use blackjack_round::Deck;
    ///
    /// let deck = Deck::standard(7);
    /// assert_eq!(deck.len(), 52);
    /// ```
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a standard deck and shuffles it once.
    #[must_use]
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard(seed);
        deck.shuffle();
        deck
    }

    /// Creates a deck that deals `cards` in order, first element first.
    ///
    /// ```
    /// use blackjack_round::{Card, Deck, Rank, Suit};
    ///
    /// let mut deck = Deck::from_cards(vec![
    ///     Card::new(Suit::Spades, Rank::Ten),
    ///     Card::new(Suit::Hearts, Rank::Ace),
    /// ]);
    /// assert_eq!(deck.deal().unwrap().rank, Rank::Ten);
    /// assert_eq!(deck.len(), 1);
    /// ```
    #[must_use]
    pub fn from_cards(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Randomizes the order of the remaining cards.
    pub fn shuffle(&mut self) {
        self.cards.shuffle(&mut self.rng);
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyDeckError`] if no cards remain.
    pub fn deal(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_every_card_once() {
        let mut deck = Deck::shuffled(3);
        let mut seen = Vec::new();
        while let Ok(card) = deck.deal() {
            assert!(!seen.contains(&card));
            seen.push(card);
        }
        assert_eq!(seen.len(), DECK_SIZE);
    }

    #[test]
    fn deal_from_empty_deck_fails() {
        let mut deck = Deck::from_cards(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.deal(), Err(EmptyDeckError));
    }

    #[test]
    fn explicit_cards_deal_front_to_back() {
        let first = Card::new(Suit::Clubs, Rank::Two);
        let second = Card::new(Suit::Hearts, Rank::Queen);
        let mut deck = Deck::from_cards(alloc::vec![first, second]);
        assert_eq!(deck.deal(), Ok(first));
        assert_eq!(deck.deal(), Ok(second));
        assert_eq!(deck.deal(), Err(EmptyDeckError));
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Deck::shuffled(42);
        let mut b = Deck::shuffled(42);
        for _ in 0..DECK_SIZE {
            assert_eq!(a.deal(), b.deal());
        }
    }

    #[test]
    fn shuffle_keeps_count() {
        let mut deck = Deck::standard(1);
        let _ = deck.deal();
        deck.shuffle();
        assert_eq!(deck.len(), DECK_SIZE - 1);
    }
}
