//! Round result types for showdown.

extern crate alloc;

use alloc::vec::Vec;

/// How a player's round ended against the dealer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player wins (dealer busts or player has the higher score).
    Win,
    /// Player loses (player busts or dealer has the higher score).
    Lose,
    /// Equal scores.
    Draw,
}

impl Outcome {
    /// Decides a player's outcome from both final hands.
    ///
    /// A busted player loses even if the dealer also busted.
    #[must_use]
    pub const fn decide(
        player_score: u8,
        player_bust: bool,
        dealer_score: u8,
        dealer_bust: bool,
    ) -> Self {
        if player_bust {
            Self::Lose
        } else if dealer_bust || player_score > dealer_score {
            Self::Win
        } else if player_score < dealer_score {
            Self::Lose
        } else {
            Self::Draw
        }
    }
}

/// Result for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// The player number.
    pub player: u8,
    /// The outcome against the dealer.
    pub outcome: Outcome,
    /// The player's final score.
    pub score: u8,
    /// Whether the player busted.
    pub bust: bool,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
}

impl RoundResult {
    /// Returns the result for the given player number.
    #[must_use]
    pub fn player(&self, number: u8) -> Option<&PlayerResult> {
        self.players.iter().find(|result| result.player == number)
    }
}
