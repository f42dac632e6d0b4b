//! Command-line interface for utictac.

use clap::{Parser, ValueEnum};
use utictac::Player;

/// Ultimate tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "utictac")]
#[command(about = "Play ultimate tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Player who moves first (overrides the settings file)
    #[arg(long, value_enum)]
    pub first: Option<Mark>,

    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}

/// Player mark as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mark {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<Mark> for Player {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Player::X,
            Mark::O => Player::O,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["utictac"]);
        assert!(cli.config.is_none());
        assert!(cli.first.is_none());
        assert!(!cli.plain);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["utictac", "--first", "x", "--plain", "-c", "house.toml"]);
        assert_eq!(cli.first.map(Player::from), Some(Player::X));
        assert!(cli.plain);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("house.toml")));
    }
}
