//! Win detection by scanning lines from an origin along a step vector.

use super::Grid;
use crate::types::{Cell, Position};
use tracing::instrument;

/// A winning line: three cells starting at `start`, advancing by `step`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// First cell of the line.
    pub start: Position,
    /// Direction between consecutive cells.
    pub step: Position,
}

impl Line {
    const fn new(start: (i32, i32), step: (i32, i32)) -> Self {
        Self {
            start: Position::new(start.0, start.1),
            step: Position::new(step.0, step.1),
        }
    }

    /// The three positions on this line.
    pub fn positions(self) -> [Position; 3] {
        let second = self.start.shift(self.step);
        [self.start, second, second.shift(self.step)]
    }
}

/// The eight lines of a 3x3 grid, in scan order.
pub const LINES: [Line; 8] = [
    // Rows
    Line::new((0, 0), (0, 1)),
    Line::new((1, 0), (0, 1)),
    Line::new((2, 0), (0, 1)),
    // Columns
    Line::new((0, 0), (1, 0)),
    Line::new((0, 1), (1, 0)),
    Line::new((0, 2), (1, 0)),
    // Diagonals
    Line::new((0, 0), (1, 1)),
    Line::new((2, 0), (-1, 1)),
];

/// Returns the first line in [`LINES`] held entirely by one mark, with that mark.
#[instrument(skip(grid))]
pub fn winning_line<G: Grid + ?Sized>(grid: &G) -> Option<(Line, Cell)> {
    LINES.iter().find_map(|line| {
        let [a, b, c] = line.positions();
        let mark = grid.cell(a)?;
        (mark != Cell::Empty && grid.cell(b)? == mark && grid.cell(c)? == mark)
            .then_some((*line, mark))
    })
}

/// Returns the winning mark of `grid`, or [`Cell::Empty`] if no line is complete.
#[instrument(skip(grid))]
pub fn line_winner<G: Grid + ?Sized>(grid: &G) -> Cell {
    winning_line(grid).map_or(Cell::Empty, |(_, mark)| mark)
}
