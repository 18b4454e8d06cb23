//! Round configuration options.

/// Score at which the dealer stops drawing.
pub const DEFAULT_DEALER_THRESHOLD: u8 = 17;

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use blackjack_round::RoundOptions;
///
/// let options = RoundOptions::default()
///     .with_players(3)
///     .with_dealer_threshold(17);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoundOptions {
    /// Number of human players seated before the dealer.
    pub players: u8,
    /// The dealer hits while its score is below this value.
    pub dealer_threshold: u8,
}

impl Default for RoundOptions {
    fn default() -> Self {
        Self {
            players: 1,
            dealer_threshold: DEFAULT_DEALER_THRESHOLD,
        }
    }
}

impl RoundOptions {
    /// Sets the number of players.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_players(4);
    /// assert_eq!(options.players, 4);
    /// ```
    #[must_use]
    pub const fn with_players(mut self, players: u8) -> Self {
        self.players = players;
        self
    }

    /// Sets the dealer's standing threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use blackjack_round::RoundOptions;
    ///
    /// let options = RoundOptions::default().with_dealer_threshold(16);
    /// assert_eq!(options.dealer_threshold, 16);
    /// ```
    #[must_use]
    pub const fn with_dealer_threshold(mut self, threshold: u8) -> Self {
        self.dealer_threshold = threshold;
        self
    }

    /// Returns the number of cards the initial deal takes.
    #[must_use]
    pub const fn cards_needed(&self) -> usize {
        (self.players as usize + 1) * 2
    }
}
