//! Full-grid detection.

use super::Grid;
use crate::types::{Cell, Position};
use tracing::instrument;

/// Checks if every cell of the grid has been played.
///
/// The line scan reports no winner for both an unfinished grid and a drawn
/// one; this is what tells them apart.
#[instrument(skip(grid))]
pub fn is_full<G: Grid + ?Sized>(grid: &G) -> bool {
    Position::all().all(|pos| grid.cell(pos).is_some_and(|cell| cell != Cell::Empty))
}
