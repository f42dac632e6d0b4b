//! Meta-board mirror invariant: each meta cell holds its sub-board's winner.

use super::Invariant;
use crate::GameSession;

/// Invariant: the meta-board cell at `P` equals the winner of sub-board `P`.
///
/// A sub-board stops accepting moves once won, so its winner never changes
/// and the recorded cell never goes stale.
pub struct MetaMirrorInvariant;

impl Invariant<GameSession> for MetaMirrorInvariant {
    fn holds(session: &GameSession) -> bool {
        let game = session.game();
        game.boards()
            .all(|(outer, board)| game.cell_at(outer) == Ok(board.winner()))
    }

    fn description() -> &'static str {
        "Meta-board cells mirror sub-board winners"
    }
}
