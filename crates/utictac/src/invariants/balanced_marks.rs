//! Balanced marks invariant: the players take turns.

use super::Invariant;
use crate::GameSession;

/// Invariant: across all sub-boards, the first player has as many marks as
/// the second, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameSession> for BalancedMarksInvariant {
    fn holds(session: &GameSession) -> bool {
        let first = *session.rules().first_player();
        let second = first.opponent();
        let (a, b) = session
            .game()
            .boards()
            .fold((0, 0), |(a, b), (_, board)| {
                (a + board.count(first), b + board.count(second))
            });
        a == b || a == b + 1
    }

    fn description() -> &'static str {
        "Players alternate turns"
    }
}
