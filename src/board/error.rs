use thiserror::Error;

use super::color::Color;
use super::square::Square;

#[derive(Error, Debug, PartialEq)]
pub enum BoardError {
    #[error("Cannot put a piece on {square}, the square is already occupied")]
    SquareOccupiedBoardPutError { square: Square },
    #[error("Expected exactly one {color} king, found {count}")]
    KingCountError { color: Color, count: usize },
}
