//! Players and the dealer.
//!
//! Both sit behind one [`Participant`] type. They differ only in where their
//! decisions come from and in the dealer's hole card staying hidden until its
//! turn starts.

use core::cmp::Ordering;

use crate::card::Card;
use crate::error::NextActionError;
use crate::hand::{self, Hand};
use crate::source::{Action, ActionSource, TurnView};

/// Who a participant is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// A human player, numbered from 1 in seat order.
    Player(u8),
    /// The dealer, who always acts last.
    Dealer,
}

/// Where a participant is in its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// The turn has not started.
    Waiting,
    /// It is this participant's turn.
    Active,
    /// The hand went over 21.
    Busted,
    /// The participant stood.
    Stood,
}

impl TurnStatus {
    /// Returns whether the turn is over.
    #[must_use]
    pub const fn is_done(self) -> bool {
        matches!(self, Self::Busted | Self::Stood)
    }
}

/// A seat at the table: a role, a hand and a turn status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    role: Role,
    hand: Hand,
    status: TurnStatus,
}

impl Participant {
    /// Creates a participant holding its two initial cards.
    #[must_use]
    pub fn new(role: Role, dealt: [Card; 2]) -> Self {
        Self {
            role,
            hand: Hand::new(dealt),
            status: TurnStatus::Waiting,
        }
    }

    /// Returns the participant's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns whether this is the dealer.
    #[must_use]
    pub const fn is_dealer(&self) -> bool {
        matches!(self.role, Role::Dealer)
    }

    /// Returns the player number, or `None` for the dealer.
    #[must_use]
    pub const fn player_number(&self) -> Option<u8> {
        match self.role {
            Role::Player(number) => Some(number),
            Role::Dealer => None,
        }
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns all cards, including a hidden hole card.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.hand.cards()
    }

    /// Returns the turn status.
    #[must_use]
    pub const fn status(&self) -> TurnStatus {
        self.status
    }

    /// Returns whether it is this participant's turn.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, TurnStatus::Active)
    }

    /// Returns the cards other participants can see.
    ///
    /// The dealer shows only its first card until its own turn starts.
    #[must_use]
    pub fn revealed_cards(&self) -> &[Card] {
        let cards = self.hand.cards();
        if self.is_dealer() && self.status == TurnStatus::Waiting {
            &cards[..cards.len().min(1)]
        } else {
            cards
        }
    }

    /// Returns whether the dealer's hole card is still hidden.
    #[must_use]
    pub fn is_hole_hidden(&self) -> bool {
        self.revealed_cards().len() < self.hand.len()
    }

    /// Scores the full hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Scores only the revealed cards.
    #[must_use]
    pub fn visible_score(&self) -> u8 {
        hand::score(self.revealed_cards())
    }

    /// Returns whether the full hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Orders two participants by score, lowest first.
    #[must_use]
    pub fn compare_score(&self, other: &Self) -> Ordering {
        self.score().cmp(&other.score())
    }

    /// Returns the threshold strategy's decision: hit below `threshold`,
    /// stand otherwise.
    ///
    /// ```
    /// use blackjack_round::{Action, Card, Participant, Rank, Role, Suit};
    ///
    /// let dealer = Participant::new(
    ///     Role::Dealer,
    ///     [Card::new(Suit::Spades, Rank::Ten), Card::new(Suit::Hearts, Rank::Six)],
    /// );
    /// assert_eq!(dealer.dealer_action(17), Action::Hit);
    /// ```
    #[must_use]
    pub fn dealer_action(&self, threshold: u8) -> Action {
        if self.score() < threshold {
            Action::Hit
        } else {
            Action::Stand
        }
    }

    /// Decides this participant's next action.
    ///
    /// The dealer follows [`dealer_action`](Self::dealer_action) and never
    /// consults `source`. Players get their answer from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`NextActionError::Invalid`] if the source answered with
    /// something other than hit or stand, or [`NextActionError::Source`] if
    /// it could not answer.
    pub fn next_action(
        &self,
        threshold: u8,
        source: &mut dyn ActionSource,
        view: &TurnView<'_>,
    ) -> Result<Action, NextActionError> {
        if self.is_dealer() {
            return Ok(self.dealer_action(threshold));
        }

        let answer = source.next_action(view)?;
        Ok(answer.parse::<Action>()?)
    }

    pub(crate) const fn set_status(&mut self, status: TurnStatus) {
        self.status = status;
    }

    /// Adds a card and marks the participant busted if it went over 21.
    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
        if self.hand.is_bust() {
            self.status = TurnStatus::Busted;
        }
    }
}
