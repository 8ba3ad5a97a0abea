//! Move input parsing and validation.

use std::io::BufRead;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use crate::board::Square;

static COORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^([a-h][1-8])([a-h][1-8])$").expect("COORD_RE regex should be valid"));

#[derive(Error, Debug, PartialEq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("input closed")]
    EndOfInput,
}

/// What the player asked for on their turn.
#[derive(Debug, PartialEq)]
pub enum MoveInput {
    /// A move given as from/to squares, e.g. "e2e4".
    Coordinate { from: Square, to: Square },
    /// Take back the last move.
    Undo,
    Exit,
}

impl FromStr for MoveInput {
    type Err = InputError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim().to_lowercase();

        match trimmed.as_str() {
            "undo" | "u" | "z" => return Ok(MoveInput::Undo),
            "quit" | "exit" | "q" => return Ok(MoveInput::Exit),
            _ => {}
        }

        let invalid = || InputError::InvalidInput {
            input: input.trim().to_string(),
        };

        let caps = COORD_RE.captures(&trimmed).ok_or_else(invalid)?;
        let from = Square::from_algebraic(&caps[1]).ok_or_else(invalid)?;
        let to = Square::from_algebraic(&caps[2]).ok_or_else(invalid)?;

        Ok(MoveInput::Coordinate { from, to })
    }
}

/// Reads one line from `reader` and parses it as a move, an undo or an exit.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    let bytes_read = reader
        .read_line(&mut input)
        .map_err(|error| InputError::IOError {
            error: error.to_string(),
        })?;

    if bytes_read == 0 {
        return Err(InputError::EndOfInput);
    }

    input.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::{E2, E4, G8, F6};

    #[test]
    fn test_parse_coordinate_move() {
        assert_eq!(
            MoveInput::Coordinate { from: E2, to: E4 },
            "e2e4".parse().unwrap()
        );
        assert_eq!(
            MoveInput::Coordinate { from: G8, to: F6 },
            " G8F6\n".parse().unwrap()
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(MoveInput::Undo, "undo".parse().unwrap());
        assert_eq!(MoveInput::Undo, "u".parse().unwrap());
        assert_eq!(MoveInput::Undo, "z".parse().unwrap());
        assert_eq!(MoveInput::Exit, "quit".parse().unwrap());
        assert_eq!(MoveInput::Exit, "exit\n".parse().unwrap());
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            Err(InputError::InvalidInput {
                input: "e2e9".to_string()
            }),
            "e2e9".parse::<MoveInput>()
        );
        assert!("Nf3".parse::<MoveInput>().is_err());
        assert!("".parse::<MoveInput>().is_err());
    }

    #[test]
    fn test_read_move_input_from_reader() {
        let mut reader = "e2e4\nundo\n".as_bytes();
        assert_eq!(
            Ok(MoveInput::Coordinate { from: E2, to: E4 }),
            read_move_input(&mut reader)
        );
        assert_eq!(Ok(MoveInput::Undo), read_move_input(&mut reader));
        assert_eq!(Err(InputError::EndOfInput), read_move_input(&mut reader));
    }
}
