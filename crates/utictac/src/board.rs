//! A single 3x3 tic-tac-toe board.

use crate::error::GameError;
use crate::rules::{self, Grid};
use crate::types::{Cell, Player, Position, SIZE};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// 3x3 grid of cells. Played cells never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] if either coordinate is outside `[0, 2]`.
    pub fn cell_at(&self, pos: Position) -> Result<Cell, GameError> {
        self.cell(pos).ok_or(GameError::OutOfBounds(pos))
    }

    /// Marks `pos` for `player` and returns the board's winner after the move.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for a bad coordinate and
    /// [`GameError::CellOccupied`] if the cell was already played. The board is
    /// unchanged on error.
    #[instrument(skip(self))]
    pub fn play(&mut self, player: Player, pos: Position) -> Result<Cell, GameError> {
        if !self.cell_at(pos)?.is_empty() {
            return Err(GameError::CellOccupied(pos));
        }
        self.set(pos, player.into());
        let winner = self.winner();
        debug!(%winner, "Cell played");
        Ok(winner)
    }

    /// Winner of this board, recomputed from the cells on every call.
    ///
    /// [`Cell::Empty`] means no line is complete, whether or not the board is full.
    pub fn winner(&self) -> Cell {
        rules::line_winner(self)
    }

    /// Returns true if no cell is left to play.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns true if the board has a winner or no open cell.
    pub fn is_decided(&self) -> bool {
        self.winner() != Cell::Empty || self.is_full()
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        let mark = Cell::from(player);
        self.cells.iter().flatten().filter(|c| **c == mark).count()
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Overwrites a cell without any checks.
    ///
    /// Off-board positions are ignored.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        if let Some((row, col)) = pos.index() {
            self.cells[row][col] = cell;
        }
    }
}

impl Grid for Board {
    fn cell(&self, pos: Position) -> Option<Cell> {
        pos.index().map(|(row, col)| self.cells[row][col])
    }
}

/// Compact encoding: three rows of `X`, `O` or `-`, separated by newlines.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

/// Decodes the compact encoding, ignoring surrounding whitespace and indentation.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().lines().map(str::trim).collect();
        if rows.len() != SIZE as usize {
            return Err(GameError::MalformedEncoding(format!(
                "expected 3 rows, found {}",
                rows.len()
            )));
        }

        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != SIZE as usize {
                return Err(GameError::MalformedEncoding(format!(
                    "row {} has {} cells: {:?}",
                    row,
                    chars.len(),
                    line
                )));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = Cell::from_char(ch).ok_or_else(|| {
                    GameError::MalformedEncoding(format!("invalid character {ch:?}"))
                })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }
}
