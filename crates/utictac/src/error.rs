//! Error type shared by boards, the meta game and the session.

use crate::types::{Cell, Player, Position};

/// Reasons an operation on the engine can be rejected.
///
/// Every variant is recoverable: a rejected move leaves all state untouched.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A coordinate fell outside `[0, 2]`.
    #[display("Position out of bounds: {}", _0)]
    OutOfBounds(Position),

    /// The target cell was already played.
    #[display("Cell {} already played", _0)]
    CellOccupied(Position),

    /// The target sub-board already has a winner.
    #[display("Outer game {} already won by {}", board, winner)]
    GameAlreadyDecided {
        /// The sub-board that was targeted.
        board: Position,
        /// Who won it.
        winner: Cell,
    },

    /// A sub-board other than the forced one was targeted.
    #[display("Must play in game {}, not {}", forced, chosen)]
    IllegalBoardChoice {
        /// The sub-board the move must go to.
        forced: Position,
        /// The sub-board the move went to.
        chosen: Position,
    },

    /// The session already has an outcome.
    #[display("Game is already over")]
    GameOver,

    /// A move was submitted for the player not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A board fixture could not be decoded.
    #[display("Malformed board encoding: {}", _0)]
    MalformedEncoding(String),

    /// Internal state broke an engine invariant.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}
