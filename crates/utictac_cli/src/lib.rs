//! Console front end for the utictac engine.
//!
//! Reads `row,col` coordinates from a line-oriented input, feeds them to a
//! [`utictac::GameSession`] and draws the board after every move.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod input;
mod paint;
mod settings;

pub use cli::{Cli, Mark};
pub use console::Console;
pub use input::{InputError, parse_position};
pub use paint::Colors;
pub use settings::{ConfigError, Settings};
