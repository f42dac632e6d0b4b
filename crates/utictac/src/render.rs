//! Text rendering of the full 9x9 grid.
//!
//! ```text
//! +-----++-----++-----+
//! | X-- || --- || --- |
//! | --- || -O- || --- |
//! | --- || --- || --- |
//! +-----++-----++-----+
//! ```
//!
//! A [`Painter`] decides how each cell glyph is written, so front ends can
//! highlight won sub-boards without the engine knowing about terminals.

use crate::meta::MetaGame;
use crate::types::{Cell, Position, SIZE};
use std::fmt;

const SEPARATOR: &str = "+-----++-----++-----+";

/// Styles one cell glyph.
pub trait Painter {
    /// Returns the text for `cell`, which sits in a sub-board won by
    /// `board_winner` ([`Cell::Empty`] if the sub-board is undecided).
    fn paint(&self, cell: Cell, board_winner: Cell) -> String;
}

/// Paints glyphs as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Plain;

impl Painter for Plain {
    fn paint(&self, cell: Cell, _board_winner: Cell) -> String {
        cell.to_string()
    }
}

impl<F> Painter for F
where
    F: Fn(Cell, Cell) -> String,
{
    fn paint(&self, cell: Cell, board_winner: Cell) -> String {
        self(cell, board_winner)
    }
}

impl MetaGame {
    /// Renders all nine sub-boards, styled by `painter`.
    pub fn render<P: Painter + ?Sized>(&self, painter: &P) -> String {
        let mut out = String::new();
        out.push_str(SEPARATOR);
        out.push('\n');
        for row in 0..SIZE * SIZE {
            let cells: Vec<String> = (0..SIZE)
                .map(|board_col| {
                    let outer = Position::new(row / SIZE, board_col);
                    let inner_row = row % SIZE;
                    // Bounds hold by construction of the loops.
                    let board = self.board_at(outer).copied().unwrap_or_default();
                    let winner = board.winner();
                    (0..SIZE)
                        .map(|col| {
                            let cell = board
                                .cell_at(Position::new(inner_row, col))
                                .unwrap_or_default();
                            painter.paint(cell, winner)
                        })
                        .collect::<String>()
                })
                .collect();
            out.push_str(&format!("| {} |\n", cells.join(" || ")));
            if row % SIZE == SIZE - 1 {
                out.push_str(SEPARATOR);
                out.push('\n');
            }
        }
        out
    }
}

impl fmt::Display for MetaGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&Plain))
    }
}
