//! Round state types.

/// Where the round is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Players are taking their turns in seat order.
    PlayerTurn,
    /// The dealer plays out its hand.
    DealerTurn,
    /// Every participant is done and results can be computed.
    RoundOver,
}
