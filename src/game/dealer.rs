use alloc::vec::Vec;

use crate::card::Card;
use crate::error::{ActionError, ShowdownError};
use crate::participant::TurnStatus;
use crate::result::{Outcome, PlayerResult, RoundResult};
use crate::source::Action;

use super::{Round, RoundState};

impl Round {
    /// Dealer plays their hand according to the threshold strategy.
    ///
    /// The hole card is already revealed once the dealer's turn starts. The
    /// dealer draws while its score is below
    /// [`dealer_threshold`](crate::RoundOptions::dealer_threshold), then
    /// stands unless it busted.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not in dealer turn state or the deck
    /// is empty while the dealer must draw.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ActionError> {
        if self.state != RoundState::DealerTurn {
            return Err(ActionError::InvalidState);
        }

        let threshold = self.options.dealer_threshold;
        let mut drawn_cards = Vec::new();

        while !self.dealer.is_bust() && self.dealer.dealer_action(threshold) == Action::Hit {
            let card = self.deck.deal()?;
            self.dealer.receive(card);
            drawn_cards.push(card);
            log::debug!("dealer hits {:?}, score {}", card, self.dealer.score());
        }

        if self.dealer.status() == TurnStatus::Busted {
            log::debug!("dealer busts");
        } else {
            self.dealer.set_status(TurnStatus::Stood);
            log::debug!("dealer stands on {}", self.dealer.score());
        }

        self.state = RoundState::RoundOver;

        Ok(drawn_cards)
    }

    /// Compares every player with the dealer.
    ///
    /// A busted player loses regardless of the dealer. Otherwise a busted
    /// dealer loses to every player, and remaining hands are compared by
    /// score with equal scores drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not over.
    pub fn results(&self) -> Result<RoundResult, ShowdownError> {
        if self.state != RoundState::RoundOver {
            return Err(ShowdownError::InvalidState);
        }

        let dealer_score = self.dealer.score();
        let dealer_bust = self.dealer.is_bust();

        let players: Vec<PlayerResult> = self
            .players
            .iter()
            .filter_map(|player| {
                let number = player.player_number()?;
                let score = player.score();
                let bust = player.is_bust();
                Some(PlayerResult {
                    player: number,
                    outcome: Outcome::decide(score, bust, dealer_score, dealer_bust),
                    score,
                    bust,
                })
            })
            .collect();

        for result in &players {
            log::info!(
                "player {}: {:?} ({} vs dealer {})",
                result.player,
                result.outcome,
                result.score,
                dealer_score
            );
        }

        Ok(RoundResult {
            players,
            dealer_score,
            dealer_bust,
        })
    }
}
