//! Hand scoring and the append-only hand a participant holds.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

/// Scores a sequence of cards.
///
/// Every card contributes its base value (Ace = 1). If the hand holds at
/// least one Ace and that total is at most 11, one Ace is promoted to 11.
///
/// ```
/// use blackjack_round::{Card, Rank, Suit, hand};
///
/// let cards = [
///     Card::new(Suit::Hearts, Rank::King),
///     Card::new(Suit::Spades, Rank::Ace),
/// ];
/// assert_eq!(hand::score(&cards), 21);
/// ```
#[must_use]
pub fn score(cards: &[Card]) -> u8 {
    let mut value: u8 = 0;
    let mut has_ace = false;

    for card in cards {
        has_ace |= card.rank.is_ace();
        value = value.saturating_add(card.rank.value());
    }

    if has_ace && value <= 11 {
        value += 10;
    }

    value
}

/// Returns whether the cards score over 21.
#[must_use]
pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// An ordered hand of cards.
///
/// Cards are only ever appended, and only by the round that owns the deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a hand from the two cards of the initial deal.
    #[must_use]
    pub fn new(dealt: [Card; 2]) -> Self {
        Self {
            cards: dealt.to_vec(),
        }
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in dealing order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Scores the whole hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        score(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_bust(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    ///
    /// A dealt hand always holds at least two cards, so this is `false` in
    /// practice.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(rank: Rank) -> Card {
        Card::new(Suit::Spades, rank)
    }

    #[test]
    fn empty_hand_scores_zero() {
        assert_eq!(score(&[]), 0);
        assert!(!is_bust(&[]));
    }

    #[test]
    fn two_aces_score_twelve() {
        assert_eq!(score(&[card(Rank::Ace), card(Rank::Ace)]), 12);
    }

    #[test]
    fn ace_drops_to_one_when_eleven_would_bust() {
        let cards = [card(Rank::Ace), card(Rank::Nine), card(Rank::Five)];
        assert_eq!(score(&cards), 15);
    }

    #[test]
    fn only_one_ace_is_promoted() {
        let cards = [card(Rank::Ace), card(Rank::Ace), card(Rank::Nine)];
        assert_eq!(score(&cards), 21);
        let cards = [card(Rank::Ace), card(Rank::Ace), card(Rank::Ace)];
        assert_eq!(score(&cards), 13);
    }

    #[test]
    fn twenty_one_is_not_bust() {
        let cards = [card(Rank::Ten), card(Rank::Five), card(Rank::Six)];
        assert_eq!(score(&cards), 21);
        assert!(!is_bust(&cards));

        let cards = [card(Rank::Ten), card(Rank::Queen), card(Rank::Two)];
        assert_eq!(score(&cards), 22);
        assert!(is_bust(&cards));
    }

    #[test]
    fn hand_rescores_as_it_grows() {
        let mut hand = Hand::new([card(Rank::Ace), card(Rank::Six)]);
        assert_eq!(hand.score(), 17);
        hand.push(card(Rank::Nine));
        assert_eq!(hand.score(), 16);
        hand.push(card(Rank::King));
        assert_eq!(hand.score(), 26);
        assert!(hand.is_bust());
        assert_eq!(hand.len(), 4);
    }
}
