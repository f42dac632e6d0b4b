//! The board of boards.

use crate::board::Board;
use crate::error::GameError;
use crate::types::{Cell, Player, Position};
use tracing::{debug, error, info, instrument};

/// Nine sub-boards plus the meta-board that records who won each of them.
///
/// The meta-board cell at `P` is written exactly once, when the sub-board at
/// `P` first gets a winner. Since [`Board::play`] refuses occupied cells, it
/// can never be overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetaGame {
    pub(crate) boards: [[Board; 3]; 3],
    pub(crate) meta: Board,
}

impl MetaGame {
    /// Creates a game with nine empty sub-boards.
    pub fn new() -> Self {
        Self::default()
    }

    /// Winner recorded for the sub-board at `outer`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for a bad coordinate.
    pub fn cell_at(&self, outer: Position) -> Result<Cell, GameError> {
        self.meta.cell_at(outer)
    }

    /// The sub-board at `outer`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for a bad coordinate.
    pub fn board_at(&self, outer: Position) -> Result<&Board, GameError> {
        outer
            .index()
            .map(|(row, col)| &self.boards[row][col])
            .ok_or(GameError::OutOfBounds(outer))
    }

    fn board_at_mut(&mut self, outer: Position) -> Result<&mut Board, GameError> {
        outer
            .index()
            .map(|(row, col)| &mut self.boards[row][col])
            .ok_or(GameError::OutOfBounds(outer))
    }

    /// The meta-board: one cell per sub-board, holding its winner.
    pub fn meta_board(&self) -> &Board {
        &self.meta
    }

    /// Plays `player` at cell `inner` of sub-board `outer`.
    ///
    /// Returns the overall winner after the move, [`Cell::Empty`] while the
    /// game goes on.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyDecided`] if sub-board `outer` already has a winner
    /// - [`GameError::OutOfBounds`] / [`GameError::CellOccupied`] from the sub-board
    /// - [`GameError::InvariantViolation`] if the meta-board refuses a fresh win,
    ///   which means it was changed outside this method
    #[instrument(skip(self))]
    pub fn play(
        &mut self,
        outer: Position,
        inner: Position,
        player: Player,
    ) -> Result<Cell, GameError> {
        let recorded = self.meta.cell_at(outer)?;
        if !recorded.is_empty() {
            return Err(GameError::GameAlreadyDecided {
                board: outer,
                winner: recorded,
            });
        }

        let sub_winner = self.board_at_mut(outer)?.play(player, inner)?;
        if sub_winner.is_empty() {
            return Ok(self.meta.winner());
        }

        info!(%outer, %player, "Sub-board won");
        self.meta.play(player, outer).map_err(|e| {
            error!(%outer, error = %e, "Meta-board rejected a sub-board win");
            GameError::InvariantViolation(format!(
                "meta-board cell {outer} was set before its sub-board was won: {e}"
            ))
        })?;

        let winner = self.meta.winner();
        debug!(%winner, "Meta-board updated");
        Ok(winner)
    }

    /// Overall winner: the line scan applied to the meta-board.
    pub fn winner(&self) -> Cell {
        self.meta.winner()
    }

    /// Returns true if sub-board `outer` is won or has no open cell.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for a bad coordinate.
    pub fn is_decided(&self, outer: Position) -> Result<bool, GameError> {
        Ok(!self.cell_at(outer)?.is_empty() || self.board_at(outer)?.is_full())
    }

    /// Returns true if every sub-board is won or full.
    pub fn is_exhausted(&self) -> bool {
        Position::all().all(|outer| self.is_decided(outer).unwrap_or(true))
    }

    /// Sub-boards in row-major order with their coordinates.
    pub fn boards(&self) -> impl Iterator<Item = (Position, &Board)> {
        Position::all().zip(self.boards.iter().flatten())
    }
}
