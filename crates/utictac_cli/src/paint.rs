//! Terminal colors for the board and messages.

use crossterm::style::{StyledContent, Stylize};
use utictac::{Cell, Painter, Player};

/// Paints cells by the winner of their sub-board.
///
/// Cells in a board won by O are green, won by X magenta, the rest blue.
#[derive(Debug, Clone, Copy, Default)]
pub struct Colors;

impl Painter for Colors {
    fn paint(&self, cell: Cell, board_winner: Cell) -> String {
        let glyph = cell.to_string();
        match board_winner.player() {
            Some(player) => player_style(player, glyph).to_string(),
            None => glyph.blue().to_string(),
        }
    }
}

/// Bold player color used for marks and turn announcements.
pub fn player_style(player: Player, text: String) -> StyledContent<String> {
    match player {
        Player::O => text.green().bold(),
        Player::X => text.magenta().bold(),
    }
}

/// Style for rejected input.
pub fn error_style(text: String) -> StyledContent<String> {
    text.red().bold()
}
