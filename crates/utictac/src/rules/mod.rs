//! Game rules shared by sub-boards and the meta-board.
//!
//! Rules are pure functions over anything that implements [`Grid`], so the
//! same line scan decides a single board and the board of boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, line_winner, winning_line};

use crate::types::{Cell, Position};

/// Read access to a 3x3 arrangement of cells.
pub trait Grid {
    /// Returns the cell at `pos`, or `None` when `pos` is off the grid.
    fn cell(&self, pos: Position) -> Option<Cell>;
}
