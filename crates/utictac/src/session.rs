//! Turn and forced-board bookkeeping around a [`MetaGame`].

use crate::action::Move;
use crate::config::Rules;
use crate::error::GameError;
#[cfg(debug_assertions)]
use crate::invariants::{InvariantSet, SessionInvariants};
use crate::meta::MetaGame;
use crate::types::{Cell, Player, Position};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Moves are being accepted.
    InProgress,
    /// Three sub-boards in a line were won by this player.
    Won(Player),
    /// Every sub-board is decided and the meta-board has no line.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has an outcome.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} Wins!", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// A game in play: the boards, whose turn it is, and where they must play.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) game: MetaGame,
    rules: Rules,
    to_move: Player,
    forced: Option<Position>,
    status: GameStatus,
}

impl GameSession {
    /// Starts a session under the default rules: O moves first, anywhere.
    pub fn new() -> Self {
        Self::with_rules(Rules::default())
    }

    /// Starts a session under `rules`.
    #[instrument]
    pub fn with_rules(rules: Rules) -> Self {
        Self {
            game: MetaGame::new(),
            rules,
            to_move: *rules.first_player(),
            forced: None,
            status: GameStatus::InProgress,
        }
    }

    /// Plays the current player at cell `inner` of sub-board `outer`.
    ///
    /// On success the next move is forced into sub-board `inner`, unless that
    /// sub-board is decided, in which case the next player may choose freely.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] once the game has an outcome
    /// - [`GameError::IllegalBoardChoice`] if `outer` is not the forced sub-board
    /// - anything [`MetaGame::play`] rejects
    ///
    /// Rejected moves leave the session untouched.
    #[instrument(skip(self), fields(player = %self.to_move, forced = ?self.forced))]
    pub fn submit(&mut self, outer: Position, inner: Position) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            warn!(status = %self.status, "Move after game over");
            return Err(GameError::GameOver);
        }
        if let Some(forced) = self.forced
            && forced != outer
        {
            warn!(%forced, chosen = %outer, "Move outside forced board");
            return Err(GameError::IllegalBoardChoice {
                forced,
                chosen: outer,
            });
        }

        let player = self.to_move;
        let winner = self
            .game
            .play(outer, inner, player)
            .inspect_err(|e| warn!(error = %e, "Move rejected"))?;

        if let Some(winner) = winner.player() {
            info!(%winner, "Game won");
            self.forced = None;
            self.status = GameStatus::Won(winner);
        } else if self.game.is_exhausted() {
            info!("Every sub-board decided without a winner");
            self.forced = None;
            self.status = GameStatus::Draw;
        } else {
            self.forced = if self.is_closed(inner)? {
                None
            } else {
                Some(inner)
            };
            self.to_move = player.opponent();
            debug!(next = %self.to_move, forced = ?self.forced, "Turn passed");
        }

        #[cfg(debug_assertions)]
        self.check_invariants()?;

        Ok(self.status)
    }

    /// Submits `action` after checking it belongs to the player on turn.
    ///
    /// # Errors
    ///
    /// [`GameError::WrongPlayer`] if `action.player` is not on turn, otherwise
    /// whatever [`GameSession::submit`] returns.
    #[instrument(skip(self, action), fields(%action))]
    pub fn play(&mut self, action: Move) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if action.player != self.to_move {
            return Err(GameError::WrongPlayer(action.player));
        }
        self.submit(action.board, action.cell)
    }

    /// Plays `moves` in order on a fresh session.
    ///
    /// # Errors
    ///
    /// Stops at the first rejected move and returns its error.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(rules: Rules, moves: &[Move]) -> Result<Self, GameError> {
        let mut session = Self::with_rules(rules);
        for action in moves {
            session.play(*action)?;
        }
        Ok(session)
    }

    /// Whether being sent to sub-board `outer` frees the next player's choice.
    fn is_closed(&self, outer: Position) -> Result<bool, GameError> {
        if !self.game.cell_at(outer)?.is_empty() {
            return Ok(true);
        }
        Ok(*self.rules.drawn_board_frees_choice() && self.game.board_at(outer)?.is_full())
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), GameError> {
        SessionInvariants::check_all(self).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }

    /// Every move the player on turn may make, sub-board by sub-board.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.status.is_over() {
            return Vec::new();
        }
        let player = self.to_move;
        self.game
            .boards()
            .filter(|(outer, _)| self.forced.is_none_or(|forced| forced == *outer))
            .filter(|(outer, _)| self.game.cell_at(*outer) == Ok(Cell::Empty))
            .flat_map(|(outer, board)| {
                Position::all()
                    .filter(|inner| board.cell_at(*inner) == Ok(Cell::Empty))
                    .map(move |inner| Move::new(player, outer, inner))
            })
            .collect()
    }

    /// The player whose move it is. After the game ends, the player who moved last.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// The sub-board the next move must go to, or `None` for free choice.
    pub fn forced_board(&self) -> Option<Position> {
        self.forced
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Overall winner, [`Cell::Empty`] while undecided or drawn.
    pub fn winner(&self) -> Cell {
        self.game.winner()
    }

    /// Returns true once the game has an outcome.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// The rules this session plays by.
    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Read access to the boards.
    pub fn game(&self) -> &MetaGame {
        &self.game
    }

    /// Contents of cell `inner` in sub-board `outer`.
    ///
    /// # Errors
    ///
    /// [`GameError::OutOfBounds`] for a bad coordinate.
    pub fn cell_at(&self, outer: Position, inner: Position) -> Result<Cell, GameError> {
        self.game.board_at(outer)?.cell_at(inner)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new();
        assert_eq!(session.to_move(), Player::O);
        assert_eq!(session.forced_board(), None);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.legal_moves().len(), 81);
    }

    #[test]
    fn test_forced_board_follows_inner_cell() {
        let mut session = GameSession::new();
        assert_eq!(session.submit(p(0, 0), p(1, 2)), Ok(GameStatus::InProgress));
        assert_eq!(session.forced_board(), Some(p(1, 2)));
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.legal_moves().len(), 9);
        assert!(session.legal_moves().iter().all(|m| m.board == p(1, 2)));
    }

    #[test]
    fn test_illegal_board_choice_leaves_state() {
        let mut session = GameSession::new();
        session.submit(p(0, 0), p(0, 0)).unwrap();
        let before = session.clone();

        assert_eq!(
            session.submit(p(0, 1), p(1, 1)),
            Err(GameError::IllegalBoardChoice {
                forced: p(0, 0),
                chosen: p(0, 1),
            })
        );
        assert_eq!(session.to_move(), before.to_move());
        assert_eq!(session.forced_board(), before.forced_board());
        assert_eq!(session.game(), before.game());
    }

    #[test]
    fn test_occupied_cell_leaves_turn() {
        let mut session = GameSession::new();
        session.submit(p(0, 0), p(0, 0)).unwrap();
        assert_eq!(session.submit(p(0, 0), p(0, 0)), Err(GameError::CellOccupied(p(0, 0))));
        assert_eq!(session.to_move(), Player::X);
        assert_eq!(session.forced_board(), Some(p(0, 0)));
    }

    #[test]
    fn test_wrong_player_rejected() {
        let mut session = GameSession::new();
        assert_eq!(
            session.play(Move::new(Player::X, (0, 0), (0, 0))),
            Err(GameError::WrongPlayer(Player::X))
        );
        assert!(session.play(Move::new(Player::O, (0, 0), (0, 0))).is_ok());
    }

    #[test]
    fn test_sent_to_won_board_frees_choice() {
        // O takes the top row of sub-board (1,1); X keeps answering from (1,1)'s cells.
        let moves = [
            Move::new(Player::O, (1, 1), (0, 0)),
            Move::new(Player::X, (0, 0), (1, 1)),
            Move::new(Player::O, (1, 1), (0, 1)),
            Move::new(Player::X, (0, 1), (1, 1)),
            Move::new(Player::O, (1, 1), (0, 2)),
        ];
        let mut session = GameSession::replay(Rules::default(), &moves).unwrap();
        assert_eq!(session.game().cell_at(p(1, 1)), Ok(Cell::O));
        assert_eq!(session.forced_board(), Some(p(0, 2)));

        // X is sent to (0,2) and plays its centre, sending O to the won board.
        session.submit(p(0, 2), p(1, 1)).unwrap();
        assert_eq!(session.forced_board(), None);
        assert_eq!(session.to_move(), Player::O);
        assert!(session.legal_moves().iter().all(|m| m.board != p(1, 1)));
    }

    #[test]
    fn test_rules_pick_first_player() {
        let session = GameSession::with_rules(Rules::default().with_first_player(Player::X));
        assert_eq!(session.to_move(), Player::X);
    }

    #[test]
    fn test_cell_at_reads_sub_board() {
        let mut session = GameSession::new();
        session.submit(p(2, 1), p(0, 2)).unwrap();
        assert_eq!(session.cell_at(p(2, 1), p(0, 2)), Ok(Cell::O));
        assert_eq!(session.cell_at(p(2, 1), p(3, 0)), Err(GameError::OutOfBounds(p(3, 0))));
    }

    #[test]
    fn test_last_open_cell_without_line_is_draw() {
        let drawn: crate::Board = "XOX\nOXX\nOXO".parse().unwrap();
        let swapped: crate::Board = "OXO\nXOO\nXOX".parse().unwrap();
        let last: crate::Board = "XOX\nXOO\nOX-".parse().unwrap();

        let mut session = GameSession::new();
        for (i, outer) in Position::all().enumerate() {
            let (row, col) = (outer.row as usize, outer.col as usize);
            session.game.boards[row][col] = match i {
                8 => last,
                i if i % 2 == 0 => drawn,
                _ => swapped,
            };
        }
        session.forced = Some(p(2, 2));

        assert_eq!(session.submit(p(2, 2), p(2, 2)), Ok(GameStatus::Draw));
        assert_eq!(session.winner(), Cell::Empty);
        assert_eq!(session.forced_board(), None);
        assert_eq!(session.submit(p(0, 0), p(0, 0)), Err(GameError::GameOver));
    }
}
