//! Where player decisions come from.
//!
//! The round never reads input itself. It hands the active player's view of
//! the table to an [`ActionSource`] and parses whatever text comes back, so
//! an interactive prompt and a scripted queue are interchangeable.

use alloc::collections::VecDeque;
use alloc::string::String;
use core::str::FromStr;

use crate::card::Card;
use crate::error::{ActionSourceError, InvalidActionError};
use crate::participant::Role;

/// A turn action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take one more card.
    Hit,
    /// Keep the current hand and end the turn.
    Stand,
}

impl FromStr for Action {
    type Err = InvalidActionError;

    /// Parses `h`/`hit` or `s`/`stand`, ignoring case and surrounding
    /// whitespace.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("h") || trimmed.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if trimmed.eq_ignore_ascii_case("s") || trimmed.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(InvalidActionError {
                input: String::from(input),
            })
        }
    }
}

/// What the active player can see when asked to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnView<'a> {
    /// Who is acting.
    pub role: Role,
    /// The acting participant's cards.
    pub cards: &'a [Card],
    /// The acting participant's score.
    pub score: u8,
    /// The dealer's revealed cards.
    pub dealer_cards: &'a [Card],
    /// The score of the dealer's revealed cards.
    pub dealer_score: u8,
}

/// A provider of raw action text for human players.
pub trait ActionSource {
    /// Returns the next action text for the player described by `view`.
    ///
    /// The text does not have to be valid; the round re-asks on anything
    /// that is not hit or stand.
    ///
    /// # Errors
    ///
    /// Returns [`ActionSourceError::Closed`] if no more input is available.
    fn next_action(&mut self, view: &TurnView<'_>) -> Result<String, ActionSourceError>;

    /// Called when the last answer was rejected, before asking again.
    fn invalid(&mut self, _err: &InvalidActionError) {}
}

/// A scripted source that answers from a queue, front to back.
///
/// Every request consumes exactly one entry, including entries that turn out
/// to be invalid.
///
/// ```
/// use blackjack_round::{ActionSource, QueuedActions, Role, TurnView};
///
/// let mut actions = QueuedActions::new(["h", "s"]);
/// let view = TurnView {
///     role: Role::Player(1),
///     cards: &[],
///     score: 0,
///     dealer_cards: &[],
///     dealer_score: 0,
/// };
/// assert_eq!(actions.next_action(&view).unwrap(), "h");
/// assert_eq!(actions.remaining(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueuedActions {
    queue: VecDeque<String>,
}

impl QueuedActions {
    /// Creates a queue from the given action texts.
    pub fn new<I, S>(actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: actions.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends an action text to the back of the queue.
    pub fn push(&mut self, action: impl Into<String>) {
        self.queue.push_back(action.into());
    }

    /// Returns the number of unanswered entries.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl ActionSource for QueuedActions {
    fn next_action(&mut self, _view: &TurnView<'_>) -> Result<String, ActionSourceError> {
        self.queue.pop_front().ok_or(ActionSourceError::Closed)
    }
}

#[cfg(feature = "std")]
pub use console::ConsoleActions;

#[cfg(feature = "std")]
mod console {
    use std::io::{self, BufRead, Write};

    use alloc::string::String;

    use crate::error::{ActionSourceError, InvalidActionError};
    use crate::participant::Role;

    use super::{ActionSource, TurnView};

    /// A line-based interactive source.
    ///
    /// Writes a short prompt and reads one line per request. End of input or
    /// a read error closes the source.
    #[derive(Debug)]
    pub struct ConsoleActions<R, W> {
        input: R,
        output: W,
    }

    impl ConsoleActions<io::StdinLock<'static>, io::Stdout> {
        /// Creates a source reading from stdin and prompting on stdout.
        #[must_use]
        pub fn stdio() -> Self {
            Self::new(io::stdin().lock(), io::stdout())
        }
    }

    impl<R: BufRead, W: Write> ConsoleActions<R, W> {
        /// Creates a source over the given reader and writer.
        pub const fn new(input: R, output: W) -> Self {
            Self { input, output }
        }

        /// Returns the writer, for example to inspect prompts in tests.
        pub fn into_output(self) -> W {
            self.output
        }
    }

    impl<R: BufRead, W: Write> ActionSource for ConsoleActions<R, W> {
        fn next_action(&mut self, view: &TurnView<'_>) -> Result<String, ActionSourceError> {
            // Prompt failures are not fatal; the read below decides.
            let _ = match view.role {
                Role::Player(number) => write!(self.output, "Player {number}"),
                Role::Dealer => write!(self.output, "Dealer"),
            };
            let _ = write!(
                self.output,
                " ({}) vs dealer ({}): [h]it or [s]tand? ",
                view.score, view.dealer_score
            );
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => Err(ActionSourceError::Closed),
                Ok(_) => Ok(String::from(line.trim_end_matches(['\r', '\n']))),
            }
        }

        fn invalid(&mut self, err: &InvalidActionError) {
            let _ = writeln!(self.output, "{err}");
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!("h".parse::<Action>(), Ok(Action::Hit));
        assert_eq!(" HIT ".parse::<Action>(), Ok(Action::Hit));
        assert_eq!("s".parse::<Action>(), Ok(Action::Stand));
        assert_eq!("Stand\n".parse::<Action>(), Ok(Action::Stand));
    }

    #[test]
    fn rejects_anything_else() {
        let err = "double".parse::<Action>().unwrap_err();
        assert_eq!(err.input, "double");
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn queue_closes_when_empty() {
        let view = TurnView {
            role: Role::Player(1),
            cards: &[],
            score: 0,
            dealer_cards: &[],
            dealer_score: 0,
        };
        let mut actions = QueuedActions::new(["s"]);
        actions.push("h");
        assert_eq!(actions.next_action(&view), Ok(String::from("s")));
        assert_eq!(actions.next_action(&view), Ok(String::from("h")));
        assert_eq!(actions.next_action(&view), Err(ActionSourceError::Closed));
    }
}
