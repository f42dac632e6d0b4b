//! Ultimate tic-tac-toe game engine.
//!
//! Nine tic-tac-toe boards sit in a 3x3 grid. Winning a sub-board claims the
//! matching cell of the meta-board, and three meta cells in a line win the
//! game. The cell you play in picks the sub-board your opponent must play in
//! next.
//!
//! # Architecture
//!
//! - **Board**: one 3x3 grid with move application and win detection
//! - **MetaGame**: nine boards plus the meta-board, with win propagation
//! - **GameSession**: whose turn it is and which sub-board is forced
//! - **Rules**: line scanning shared by every grid
//!
//! # Example
//!
//! ```
//! use utictac::{GameSession, Player, Position};
//!
//! let mut session = GameSession::new();
//! session.submit(Position::new(0, 0), Position::new(1, 2))?;
//! assert_eq!(session.forced_board(), Some(Position::new(1, 2)));
//! assert_eq!(session.to_move(), Player::X);
//! # Ok::<(), utictac::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod config;
mod error;
pub mod invariants;
mod meta;
mod render;
pub mod rules;
mod session;
mod types;

pub use action::Move;
pub use board::Board;
pub use config::Rules;
pub use error::GameError;
pub use meta::MetaGame;
pub use render::{Painter, Plain};
pub use session::{GameSession, GameStatus};
pub use types::{Cell, Player, Position, SIZE};
