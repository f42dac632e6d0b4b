//! First-class move type.

use crate::types::{Player, Position};

/// A player marking cell `cell` of sub-board `board`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The sub-board being played in.
    pub board: Position,
    /// The cell inside that sub-board.
    pub cell: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, board: impl Into<Position>, cell: impl Into<Position>) -> Self {
        Self {
            player,
            board: board.into(),
            cell: cell.into(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.player, self.board, self.cell)
    }
}
