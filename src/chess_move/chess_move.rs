use core::fmt;
use std::hash::{Hash, Hasher};

use crate::board::{Board, Color, Occupant, Piece, Square};

/// A single ply: where a piece came from, where it went, and snapshots of
/// both squares taken from the board the move was built against.
///
/// Two moves are equal when they share the same from/to squares, whatever
/// pieces they carry.
#[derive(Clone, Copy, Eq)]
pub struct ChessMove {
    from_square: Square,
    to_square: Square,
    piece_moved: (Piece, Color),
    piece_captured: Occupant,
}

impl ChessMove {
    /// Reads the moving and captured pieces off `board`.
    ///
    /// Panics if `from_square` is empty; a move has to move something.
    pub fn new(from_square: Square, to_square: Square, board: &Board) -> Self {
        let piece_moved = match board.get(from_square) {
            Some(piece) => piece,
            None => panic!("cannot build a move from empty square {}", from_square),
        };

        Self {
            from_square,
            to_square,
            piece_moved,
            piece_captured: board.get(to_square),
        }
    }

    pub fn from_square(&self) -> Square {
        self.from_square
    }

    pub fn to_square(&self) -> Square {
        self.to_square
    }

    pub fn piece_moved(&self) -> (Piece, Color) {
        self.piece_moved
    }

    pub fn piece_captured(&self) -> Occupant {
        self.piece_captured
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Identity key built from the four coordinates, one decimal digit each.
    pub fn id(&self) -> u16 {
        self.from_square.row() as u16 * 1000
            + self.from_square.col() as u16 * 100
            + self.to_square.row() as u16 * 10
            + self.to_square.col() as u16
    }

    /// Coordinate notation, e.g. `e2e4`.
    pub fn to_notation(&self) -> String {
        format!(
            "{}{}",
            self.from_square.to_algebraic(),
            self.to_square.to_algebraic()
        )
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &ChessMove) -> bool {
        self.id() == other.id()
    }
}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (piece, color) = self.piece_moved;
        let capture_msg = match self.piece_captured {
            Some((captured, captured_color)) => {
                format!(" (captures {})", captured.to_code(captured_color))
            }
            None => "".to_string(),
        };

        write!(
            f,
            "{} {}{}",
            piece.to_code(color),
            self.to_notation(),
            capture_msg
        )
    }
}

impl fmt::Debug for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format!("{}", self).fmt(f)
    }
}
