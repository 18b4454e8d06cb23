use crate::card::Card;
use crate::error::{ActionError, NextActionError, PlayError};
use crate::participant::TurnStatus;
use crate::result::RoundResult;
use crate::source::{Action, ActionSource};

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state != RoundState::PlayerTurn || self.current >= self.players.len() {
            return Err(ActionError::InvalidState);
        }

        Ok(())
    }

    /// Hands the turn to the next player, or to the dealer after the last
    /// player.
    fn advance_turn(&mut self) {
        self.current += 1;

        if let Some(next) = self.players.get_mut(self.current) {
            next.set_status(TurnStatus::Active);
            log::debug!("player {} to act", self.current + 1);
        } else {
            self.dealer.set_status(TurnStatus::Active);
            self.state = RoundState::DealerTurn;
            log::debug!("dealer reveals {:?}", self.dealer.cards());
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the new card busts the hand the turn ends immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player's turn or the deck is empty.
    /// An empty deck leaves the hand and the turn unchanged.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let Self {
            deck,
            players,
            current,
            ..
        } = self;
        let player = players.get_mut(*current).ok_or(ActionError::InvalidState)?;
        let card = deck.deal()?;
        player.receive(card);
        log::debug!(
            "player {} hits {:?}, score {}",
            *current + 1,
            card,
            player.score()
        );

        if player.status() == TurnStatus::Busted {
            log::debug!("player {} busts", *current + 1);
            self.advance_turn();
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if it is not a player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;

        let player = self
            .players
            .get_mut(self.current)
            .ok_or(ActionError::InvalidState)?;
        player.set_status(TurnStatus::Stood);
        log::debug!(
            "player {} stands on {}",
            self.current + 1,
            player.score()
        );

        self.advance_turn();

        Ok(())
    }

    /// Applies `action` to the active player.
    ///
    /// # Errors
    ///
    /// See [`hit`](Self::hit) and [`stand`](Self::stand).
    pub fn apply(&mut self, action: Action) -> Result<(), ActionError> {
        match action {
            Action::Hit => self.hit().map(|_| ()),
            Action::Stand => self.stand(),
        }
    }

    /// Asks the current participant for a valid action.
    ///
    /// Players are asked through `source` until it answers hit or stand.
    /// Rejected answers are reported back to the source and change nothing
    /// in the round. The dealer answers by its threshold strategy.
    ///
    /// # Errors
    ///
    /// Returns [`PlayError::Action`] if the round is over, or
    /// [`PlayError::Source`] if the source closes before a valid answer.
    pub fn request_action(&self, source: &mut dyn ActionSource) -> Result<Action, PlayError> {
        let participant = self.current().ok_or(ActionError::InvalidState)?;
        let view = self.view_for(participant);

        loop {
            match participant.next_action(self.options.dealer_threshold, source, &view) {
                Ok(action) => return Ok(action),
                Err(NextActionError::Invalid(err)) => {
                    log::warn!("{err}");
                    source.invalid(&err);
                }
                Err(NextActionError::Source(err)) => return Err(err.into()),
            }
        }
    }

    /// Plays the rest of the round: remaining player turns through `source`,
    /// then the dealer.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::{Card, Deck, Outcome, QueuedActions, Rank, Round, RoundOptions, Suit};
    ///
    /// let deck = Deck::from_cards(vec![
    ///     Card::new(Suit::Spades, Rank::Ten),
    ///     Card::new(Suit::Spades, Rank::Nine),
    ///     Card::new(Suit::Hearts, Rank::Ten),
    ///     Card::new(Suit::Hearts, Rank::Seven),
    /// ]);
    /// let mut round = Round::with_deck(RoundOptions::default(), deck).unwrap();
    /// let result = round.play(&mut QueuedActions::new(["s"])).unwrap();
    /// assert_eq!(result.players[0].outcome, Outcome::Win);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the source closes or the deck runs out. The round
    /// is left where it stopped and produces no result.
    pub fn play(&mut self, source: &mut dyn ActionSource) -> Result<RoundResult, PlayError> {
        while self.state == RoundState::PlayerTurn {
            let action = self.request_action(source)?;
            self.apply(action)?;
        }

        if self.state == RoundState::DealerTurn {
            self.dealer_play()?;
        }

        Ok(self.results()?)
    }
}
