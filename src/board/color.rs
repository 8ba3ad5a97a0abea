use std::fmt;

#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Row delta of a single pawn step. White advances toward row 0.
    pub fn pawn_direction(&self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// The row pawns start on, and the only row they may double step from.
    pub fn pawn_home_row(&self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 6,
        }
    }

    /// First character of the two-character piece code, e.g. the `w` in `wK`.
    pub fn code(&self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color_str = match self {
            Color::Black => "black",
            Color::White => "white",
        };
        write!(f, "{}", color_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        assert_eq!(Color::Black, Color::White.opposite());
        assert_eq!(Color::White, Color::Black.opposite());
    }

    #[test]
    fn test_pawn_geometry() {
        assert_eq!(-1, Color::White.pawn_direction());
        assert_eq!(1, Color::Black.pawn_direction());
        assert_eq!(6, Color::White.pawn_home_row());
        assert_eq!(1, Color::Black.pawn_home_row());
    }
}
