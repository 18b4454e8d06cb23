//! The round controller.

use alloc::vec::Vec;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::options::RoundOptions;
use crate::participant::{Participant, Role, TurnStatus};
use crate::source::TurnView;

mod actions;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single round of blackjack.
///
/// The round owns the deck and every participant. It deals the initial
/// hands on construction, then advances one participant at a time: players
/// in seat order, then the dealer.
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// Round options.
    options: RoundOptions,
    /// Current round state.
    state: RoundState,
    /// Players in seat order.
    players: Vec<Participant>,
    /// The dealer.
    dealer: Participant,
    /// Index of the active player while in `PlayerTurn`.
    current: usize,
}

impl Round {
    /// Starts a round with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{Round, RoundOptions, RoundState};
    ///
    /// let round = Round::new(RoundOptions::default().with_players(2), 42).unwrap();
    /// assert_eq!(round.state(), RoundState::PlayerTurn);
    /// assert_eq!(round.cards_remaining(), 46);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoPlayers`] if `options.players` is zero, or
    /// [`DealError::NotEnoughCards`] if the deck cannot cover the deal.
    pub fn new(options: RoundOptions, seed: u64) -> Result<Self, DealError> {
        Self::with_deck(options, Deck::shuffled(seed))
    }

    /// Starts a round dealing from the given deck.
    ///
    /// Each participant receives two consecutive cards, player 1 first and
    /// the dealer last.
    ///
    /// # Errors
    ///
    /// Returns [`DealError::NoPlayers`] if `options.players` is zero, or
    /// [`DealError::NotEnoughCards`] if the deck cannot cover the deal.
    pub fn with_deck(options: RoundOptions, mut deck: Deck) -> Result<Self, DealError> {
        if options.players == 0 {
            return Err(DealError::NoPlayers);
        }

        if deck.len() < options.cards_needed() {
            return Err(DealError::NotEnoughCards);
        }

        let mut players = Vec::with_capacity(options.players as usize);
        for number in 1..=options.players {
            let dealt = [deck.deal()?, deck.deal()?];
            players.push(Participant::new(Role::Player(number), dealt));
        }
        let dealt = [deck.deal()?, deck.deal()?];
        let dealer = Participant::new(Role::Dealer, dealt);

        if let Some(first) = players.first_mut() {
            first.set_status(TurnStatus::Active);
        }

        log::debug!(
            "dealt {} players and the dealer, {} cards left",
            players.len(),
            deck.len()
        );

        Ok(Self {
            deck,
            options,
            state: RoundState::PlayerTurn,
            players,
            dealer,
            current: 0,
        })
    }

    /// Returns the round options.
    pub const fn options(&self) -> &RoundOptions {
        &self.options
    }

    /// Returns the current round state.
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the players in seat order.
    pub fn players(&self) -> &[Participant] {
        &self.players
    }

    /// Returns the player with the given number.
    pub fn player(&self, number: u8) -> Option<&Participant> {
        self.players
            .iter()
            .find(|player| player.player_number() == Some(number))
    }

    /// Returns the dealer.
    pub const fn dealer(&self) -> &Participant {
        &self.dealer
    }

    /// Returns every participant in turn order, dealer last.
    pub fn participants(&self) -> impl Iterator<Item = &Participant> {
        self.players.iter().chain(core::iter::once(&self.dealer))
    }

    /// Returns the participant whose turn it is.
    ///
    /// Returns `None` once the round is over.
    pub fn current(&self) -> Option<&Participant> {
        match self.state {
            RoundState::PlayerTurn => self.players.get(self.current),
            RoundState::DealerTurn => Some(&self.dealer),
            RoundState::RoundOver => None,
        }
    }

    /// Returns the number of cards left in the deck.
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns the number of cards held by all participants.
    pub fn cards_dealt(&self) -> usize {
        self.participants().map(|p| p.hand().len()).sum()
    }

    /// Returns the dealer's cards as the table sees them.
    pub fn dealer_revealed(&self) -> &[Card] {
        self.dealer.revealed_cards()
    }

    /// Returns the table as the current participant sees it.
    ///
    /// Returns `None` once the round is over.
    pub fn view(&self) -> Option<TurnView<'_>> {
        self.current().map(|participant| self.view_for(participant))
    }

    fn view_for<'a>(&'a self, participant: &'a Participant) -> TurnView<'a> {
        TurnView {
            role: participant.role(),
            cards: participant.cards(),
            score: participant.score(),
            dealer_cards: self.dealer.revealed_cards(),
            dealer_score: self.dealer.visible_score(),
        }
    }
}
