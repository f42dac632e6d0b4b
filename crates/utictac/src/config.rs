//! House rules a session is played under.

use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Rule options for a [`GameSession`](crate::GameSession).
///
/// Deserializes from a table where every key is optional:
///
/// ```toml
/// first_player = "O"
/// drawn_board_frees_choice = true
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Rules {
    /// Who makes the opening move.
    #[serde(default = "default_first_player")]
    first_player: Player,

    /// Whether being sent to a full sub-board with no winner grants a free
    /// choice of sub-board. When false the forced board stays on the full
    /// board and the player on turn has no legal move.
    #[serde(default = "default_drawn_board_frees_choice")]
    drawn_board_frees_choice: bool,
}

#[instrument]
fn default_first_player() -> Player {
    Player::O
}

#[instrument]
fn default_drawn_board_frees_choice() -> bool {
    true
}

impl Rules {
    /// Creates a rule set.
    pub fn new(first_player: Player, drawn_board_frees_choice: bool) -> Self {
        Self {
            first_player,
            drawn_board_frees_choice,
        }
    }

    /// Same rules with a different opening player.
    pub fn with_first_player(self, first_player: Player) -> Self {
        Self {
            first_player,
            ..self
        }
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::new(default_first_player(), default_drawn_board_frees_choice())
    }
}
