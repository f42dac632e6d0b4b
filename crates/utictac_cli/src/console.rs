//! Interactive read-eval loop over a [`GameSession`].
//!
//! Each turn the board is drawn, the player on turn is asked for a sub-board
//! (only when the choice is free) and a cell, and the move is submitted.
//! Rejected input is reported and asked for again.

use crate::input::parse_position;
use crate::paint::{Colors, error_style, player_style};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use utictac::{GameSession, GameStatus, Painter, Plain, Player, Position};

/// Terminal front end reading moves from `input` and drawing to `output`.
pub struct Console<R, W> {
    input: R,
    output: W,
    color: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `color` turns on terminal styling.
    pub fn new(input: R, output: W, color: bool) -> Self {
        Self {
            input,
            output,
            color,
        }
    }

    /// Plays `session` until it ends or input runs out.
    ///
    /// Returns the session status at that point.
    ///
    /// # Errors
    ///
    /// Only I/O failures; rejected moves are reported to the player.
    #[instrument(skip_all)]
    pub fn run(&mut self, session: &mut GameSession) -> Result<GameStatus> {
        loop {
            self.draw(session)?;

            if session.legal_moves().is_empty() {
                writeln!(self.output, "No legal moves remain")?;
                return Ok(session.status());
            }

            let player = self.player_text(session.to_move());
            writeln!(self.output, "It's {}'s turn", player)?;

            let outer = match session.forced_board() {
                Some(forced) => forced,
                None => {
                    writeln!(
                        self.output,
                        "You may play anywhere! Enter the game coordinates as row,col you'd like to play"
                    )?;
                    match self.read_position()? {
                        Some(Ok(pos)) => pos,
                        Some(Err(message)) => {
                            self.report(&message)?;
                            continue;
                        }
                        None => return Ok(session.status()),
                    }
                }
            };

            writeln!(
                self.output,
                "Enter move for game at {} as row,col coordinates",
                outer
            )?;
            let inner = match self.read_position()? {
                Some(Ok(pos)) => pos,
                Some(Err(message)) => {
                    self.report(&message)?;
                    continue;
                }
                None => return Ok(session.status()),
            };

            match session.submit(outer, inner) {
                Ok(GameStatus::InProgress) => {}
                Ok(status) => {
                    info!(%status, "Game finished");
                    self.draw(session)?;
                    self.announce(status)?;
                    return Ok(status);
                }
                Err(e) => self.report(&e.to_string())?,
            }
        }
    }

    /// Reads one line; `None` at end of input, `Some(Err)` with a message if unparsable.
    fn read_position(&mut self) -> Result<Option<Result<Position, String>>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            debug!("Input closed");
            return Ok(None);
        }
        Ok(Some(parse_position(&line).map_err(|e| e.to_string())))
    }

    fn draw(&mut self, session: &GameSession) -> Result<()> {
        let painter: &dyn Painter = if self.color { &Colors } else { &Plain };
        writeln!(self.output)?;
        write!(self.output, "{}", session.game().render(painter))?;
        Ok(())
    }

    fn announce(&mut self, status: GameStatus) -> Result<()> {
        match status {
            GameStatus::Won(player) => {
                let player = self.player_text(player);
                writeln!(self.output, "{} Wins!", player)?
            }
            GameStatus::Draw => writeln!(self.output, "Draw!")?,
            GameStatus::InProgress => {}
        }
        self.output.flush()?;
        Ok(())
    }

    fn report(&mut self, message: &str) -> Result<()> {
        if self.color {
            writeln!(self.output, "{}", error_style(message.to_string()))?;
        } else {
            writeln!(self.output, "{}", message)?;
        }
        Ok(())
    }

    fn player_text(&self, player: Player) -> String {
        if self.color {
            player_style(player, player.to_string()).to_string()
        } else {
            player.to_string()
        }
    }
}
