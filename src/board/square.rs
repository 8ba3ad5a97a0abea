use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static ALGEBRAIC_SQUARE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^([a-hA-H])([1-8])$").expect("ALGEBRAIC_SQUARE_RE regex should be valid")
});

/// A coordinate on the 8x8 board. Row 0 is black's back rank (rank 8) and
/// row 7 is white's back rank (rank 1); column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Panics if either coordinate falls outside `0..8`.
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square coordinates must be in 0..8");
        Self { row, col }
    }

    pub const fn row(&self) -> u8 {
        self.row
    }

    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the square `(d_row, d_col)` away, or `None` if that falls off the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn iter() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|row| (0..8u8).map(move |col| Square::new(row, col)))
    }

    pub fn file(&self) -> char {
        (b'a' + self.col) as char
    }

    pub fn rank(&self) -> char {
        (b'8' - self.row) as char
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.file(), self.rank())
    }

    pub fn from_algebraic(algebraic: &str) -> Option<Square> {
        let caps = ALGEBRAIC_SQUARE_RE.captures(algebraic)?;
        let file = caps[1].to_ascii_lowercase().bytes().next()?;
        let rank = caps[2].bytes().next()?;
        Some(Square::new(b'8' - rank, file - b'a'))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self, self.row, self.col)
    }
}

pub const A1: Square = Square::new(7, 0);
pub const B1: Square = Square::new(7, 1);
pub const C1: Square = Square::new(7, 2);
pub const D1: Square = Square::new(7, 3);
pub const E1: Square = Square::new(7, 4);
pub const F1: Square = Square::new(7, 5);
pub const G1: Square = Square::new(7, 6);
pub const H1: Square = Square::new(7, 7);
pub const A2: Square = Square::new(6, 0);
pub const B2: Square = Square::new(6, 1);
pub const C2: Square = Square::new(6, 2);
pub const D2: Square = Square::new(6, 3);
pub const E2: Square = Square::new(6, 4);
pub const F2: Square = Square::new(6, 5);
pub const G2: Square = Square::new(6, 6);
pub const H2: Square = Square::new(6, 7);
pub const A3: Square = Square::new(5, 0);
pub const B3: Square = Square::new(5, 1);
pub const C3: Square = Square::new(5, 2);
pub const D3: Square = Square::new(5, 3);
pub const E3: Square = Square::new(5, 4);
pub const F3: Square = Square::new(5, 5);
pub const G3: Square = Square::new(5, 6);
pub const H3: Square = Square::new(5, 7);
pub const A4: Square = Square::new(4, 0);
pub const B4: Square = Square::new(4, 1);
pub const C4: Square = Square::new(4, 2);
pub const D4: Square = Square::new(4, 3);
pub const E4: Square = Square::new(4, 4);
pub const F4: Square = Square::new(4, 5);
pub const G4: Square = Square::new(4, 6);
pub const H4: Square = Square::new(4, 7);
pub const A5: Square = Square::new(3, 0);
pub const B5: Square = Square::new(3, 1);
pub const C5: Square = Square::new(3, 2);
pub const D5: Square = Square::new(3, 3);
pub const E5: Square = Square::new(3, 4);
pub const F5: Square = Square::new(3, 5);
pub const G5: Square = Square::new(3, 6);
pub const H5: Square = Square::new(3, 7);
pub const A6: Square = Square::new(2, 0);
pub const B6: Square = Square::new(2, 1);
pub const C6: Square = Square::new(2, 2);
pub const D6: Square = Square::new(2, 3);
pub const E6: Square = Square::new(2, 4);
pub const F6: Square = Square::new(2, 5);
pub const G6: Square = Square::new(2, 6);
pub const H6: Square = Square::new(2, 7);
pub const A7: Square = Square::new(1, 0);
pub const B7: Square = Square::new(1, 1);
pub const C7: Square = Square::new(1, 2);
pub const D7: Square = Square::new(1, 3);
pub const E7: Square = Square::new(1, 4);
pub const F7: Square = Square::new(1, 5);
pub const G7: Square = Square::new(1, 6);
pub const H7: Square = Square::new(1, 7);
pub const A8: Square = Square::new(0, 0);
pub const B8: Square = Square::new(0, 1);
pub const C8: Square = Square::new(0, 2);
pub const D8: Square = Square::new(0, 3);
pub const E8: Square = Square::new(0, 4);
pub const F8: Square = Square::new(0, 5);
pub const G8: Square = Square::new(0, 6);
pub const H8: Square = Square::new(0, 7);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation() {
        assert_eq!((7, 0), (A1.row(), A1.col()));
        assert_eq!((0, 7), (H8.row(), H8.col()));
        assert_eq!((6, 4), (E2.row(), E2.col()));
        assert_eq!((4, 4), (E4.row(), E4.col()));
    }

    #[test]
    fn test_to_algebraic() {
        assert_eq!("a1", A1.to_algebraic());
        assert_eq!("e2", Square::new(6, 4).to_algebraic());
        assert_eq!("h8", Square::new(0, 7).to_algebraic());
        assert_eq!("b8", format!("{}", B8));
    }

    #[test]
    fn test_from_algebraic() {
        assert_eq!(Some(A1), Square::from_algebraic("a1"));
        assert_eq!(Some(A1), Square::from_algebraic("A1"));
        assert_eq!(Some(E5), Square::from_algebraic("e5"));
        assert_eq!(None, Square::from_algebraic("i1"));
        assert_eq!(None, Square::from_algebraic("a9"));
        assert_eq!(None, Square::from_algebraic("e2e4"));
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Some(E4), E2.offset(-2, 0));
        assert_eq!(None, A1.offset(1, 0));
        assert_eq!(None, A1.offset(0, -1));
        assert_eq!(None, H8.offset(-1, 0));
        assert_eq!(Some(G7), H8.offset(1, -1));
    }

    #[test]
    fn test_iter_covers_board() {
        let squares: Vec<Square> = Square::iter().collect();
        assert_eq!(64, squares.len());
        assert_eq!(A8, squares[0]);
        assert_eq!(H1, squares[63]);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_square_panics() {
        let _ = Square::new(8, 0);
    }
}
