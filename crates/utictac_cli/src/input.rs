//! Parsing typed coordinates.

use utictac::Position;

/// Why a typed coordinate was rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// The line had no single comma separating row and column.
    #[display("Invalid format, must have a comma: {}", _0)]
    MissingComma(String),

    /// One side of the comma was not an integer.
    #[display("{} is not a valid number", _0)]
    NotANumber(String),
}

impl std::error::Error for InputError {}

/// Parses `row,col`, ignoring whitespace around either number.
///
/// Range is not checked here; the engine rejects off-board coordinates.
pub fn parse_position(line: &str) -> Result<Position, InputError> {
    let line = line.trim();
    let Some((row, col)) = line.split_once(',') else {
        return Err(InputError::MissingComma(line.to_string()));
    };
    if col.contains(',') {
        return Err(InputError::MissingComma(line.to_string()));
    }
    Ok(Position::new(parse_number(row)?, parse_number(col)?))
}

fn parse_number(s: &str) -> Result<i32, InputError> {
    let s = s.trim();
    s.parse()
        .map_err(|_| InputError::NotANumber(s.to_string()))
}
