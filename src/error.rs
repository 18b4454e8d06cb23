//! Error types for round operations.

use alloc::string::String;

use thiserror::Error;

/// The deck has no cards left to deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no cards left in the deck")]
pub struct EmptyDeckError;

/// Action text that is neither hit nor stand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action `{input}`, expected hit or stand")]
pub struct InvalidActionError {
    /// The rejected input, as received.
    pub input: String,
}

/// Errors that can occur while dealing the initial hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// The round was configured with no players.
    #[error("a round needs at least one player")]
    NoPlayers,
    /// Not enough cards in the deck for two per participant.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

impl From<EmptyDeckError> for DealError {
    fn from(_: EmptyDeckError) -> Self {
        Self::NotEnoughCards
    }
}

/// Errors that can occur during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not allowed in the current round state.
    #[error("invalid round state for this action")]
    InvalidState,
    /// A card was needed but the deck is exhausted.
    #[error(transparent)]
    EmptyDeck(#[from] EmptyDeckError),
}

/// Errors that can occur when settling the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// The round is not over yet.
    #[error("invalid round state for showdown")]
    InvalidState,
}

/// Errors reported by an [`ActionSource`](crate::source::ActionSource).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionSourceError {
    /// The source cannot produce any more actions.
    #[error("action source is closed")]
    Closed,
}

/// Errors that can occur while asking a participant for its next action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NextActionError {
    /// The source answered with something other than hit or stand.
    #[error(transparent)]
    Invalid(#[from] InvalidActionError),
    /// The source could not answer.
    #[error(transparent)]
    Source(#[from] ActionSourceError),
}

/// Errors that end a round played by [`Round::play`](crate::game::Round::play).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// A turn could not be completed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// The action source stopped answering.
    #[error(transparent)]
    Source(#[from] ActionSourceError),
    /// The round could not be settled.
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
}

impl From<EmptyDeckError> for PlayError {
    fn from(err: EmptyDeckError) -> Self {
        Self::Action(ActionError::EmptyDeck(err))
    }
}
