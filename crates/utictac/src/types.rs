//! Core value types: marks, cells, and grid coordinates.

use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Side of a board, in cells.
pub const SIZE: i32 = 3;

/// A mark a player puts on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X.
    #[display("X")]
    #[serde(alias = "x")]
    X,
    /// Player O (moves first by default).
    #[display("O")]
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one cell: a mark, or nothing yet.
///
/// The same type reports winners, where `Empty` means "no winner".
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
pub enum Cell {
    /// Marked by X.
    #[display("X")]
    X,
    /// Marked by O.
    #[display("O")]
    O,
    /// Not played.
    #[default]
    #[display("-")]
    Empty,
}

impl Cell {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    /// Decodes a fixture character (`X`, `O` or `-`).
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'X' => Some(Cell::X),
            'O' => Some(Cell::O),
            '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A (row, col) pair.
///
/// Doubles as a board coordinate and as a step vector when scanning lines,
/// so components are signed and unchecked until used to index a grid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{row},{col}")]
pub struct Position {
    /// Row, top to bottom.
    pub row: i32,
    /// Column, left to right.
    pub col: i32,
}

impl Position {
    /// Creates a position.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Moves this position by `vector`.
    pub fn shift(self, vector: Position) -> Position {
        Position::new(self.row + vector.row, self.col + vector.col)
    }

    /// Returns true if both components lie in `[0, 2]`.
    pub fn in_bounds(self) -> bool {
        (0..SIZE).contains(&self.row) && (0..SIZE).contains(&self.col)
    }

    /// Array indices for this position, or `None` when off the board.
    pub(crate) fn index(self) -> Option<(usize, usize)> {
        self.in_bounds()
            .then(|| (self.row as usize, self.col as usize))
    }

    /// All nine board coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |col| Position::new(row, col)))
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        self.shift(rhs)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Position::new(row, col)
    }
}
