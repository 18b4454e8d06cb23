//! A single-table blackjack round engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that deals the initial hands, runs
//! the player turns and the dealer's threshold strategy, and resolves each
//! player against the dealer. Player decisions come from an
//! [`ActionSource`], either an interactive prompt or a scripted queue.
//!
//! # Example
//!
//! ```no_run
//! use blackjack_round::{QueuedActions, Round, RoundOptions};
//!
//! let mut round = Round::new(RoundOptions::default(), 42).unwrap();
//! let result = round.play(&mut QueuedActions::new(["h", "s"]));
//! let _ = result;
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod participant;
pub mod result;
pub mod source;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{
    ActionError, ActionSourceError, DealError, EmptyDeckError, InvalidActionError,
    NextActionError, PlayError, ShowdownError,
};
pub use game::{Round, RoundState};
pub use hand::Hand;
pub use options::RoundOptions;
pub use participant::{Participant, Role, TurnStatus};
pub use result::{Outcome, PlayerResult, RoundResult};
#[cfg(feature = "std")]
pub use source::ConsoleActions;
pub use source::{Action, ActionSource, QueuedActions, TurnView};
