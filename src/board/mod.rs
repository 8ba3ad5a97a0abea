pub mod color;
pub mod error;
pub mod piece;
pub mod square;

mod display;

#[cfg(test)]
mod tests;

pub use color::Color;
pub use piece::Piece;
pub use square::Square;

use error::BoardError;

/// Contents of a single square. `None` is an empty square.
pub type Occupant = Option<(Piece, Color)>;

/// The 8x8 grid of pieces. Row 0 is black's back rank, row 7 is white's.
///
/// The board knows nothing about whose turn it is or how the pieces got
/// where they are; that lives in `GameState`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Occupant; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }
}

impl Board {
    /// An empty board.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn starting_position() -> Self {
        crate::chess_position! {
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR
        }
    }

    pub fn get(&self, square: Square) -> Occupant {
        self.squares[square.row() as usize][square.col() as usize]
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.get(square).is_some()
    }

    pub fn put(&mut self, square: Square, piece: Piece, color: Color) -> Result<(), BoardError> {
        if self.is_occupied(square) {
            return Err(BoardError::SquareOccupiedBoardPutError { square });
        }

        self.set(square, Some((piece, color)));
        Ok(())
    }

    /// Overwrites a square unconditionally. Only move application and undo
    /// use this, since they restore exact snapshots.
    pub(crate) fn set(&mut self, square: Square, occupant: Occupant) {
        self.squares[square.row() as usize][square.col() as usize] = occupant;
    }

    /// Rows from row 0 (rank 8) down to row 7 (rank 1).
    pub fn rows(&self) -> impl Iterator<Item = &[Occupant; 8]> {
        self.squares.iter()
    }

    /// Every occupied square, scanned row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        Square::iter().filter_map(move |square| {
            self.get(square)
                .map(|(piece, color)| (square, piece, color))
        })
    }

    /// Locates the single king of `color`. Fails unless exactly one exists.
    pub fn find_king(&self, color: Color) -> Result<Square, BoardError> {
        let kings: Vec<Square> = self
            .pieces()
            .filter(|&(_, piece, owner)| piece == Piece::King && owner == color)
            .map(|(square, _, _)| square)
            .collect();

        match kings.as_slice() {
            [king] => Ok(*king),
            _ => Err(BoardError::KingCountError {
                color,
                count: kings.len(),
            }),
        }
    }
}
