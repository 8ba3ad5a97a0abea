use super::Board;
use std::fmt;

/// Renders the board as eight lines of two-character codes, `--` for empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            let codes: Vec<String> = row
                .iter()
                .map(|occupant| match occupant {
                    Some((piece, color)) => piece.to_code(*color),
                    None => "--".to_string(),
                })
                .collect();
            writeln!(f, "{}", codes.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}", self)
    }
}

#[macro_export]
macro_rules! chess_position {
    ($($piece:tt)*) => {{
        let mut board = $crate::board::Board::new();
        // Convert all input tokens to a string and filter out whitespace characters.
        let pieces: Vec<_> = stringify!($($piece)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        // Ensure we have exactly 64 squares
        assert_eq!(pieces.len(), 64, "Invalid number of squares. Expected 64, got {}", pieces.len());
        // The diagram is drawn from white's side, so the first line is row 0
        // (black's back rank) and maps onto the board without transposing.
        for (i, &c) in pieces.iter().enumerate() {
            if c != '.' {
                let (piece, color) = $crate::board::Piece::from_fen(c)
                    .expect("Invalid character in chess position");
                let square = $crate::board::Square::new((i / 8) as u8, (i % 8) as u8);
                board
                    .put(square, piece, color)
                    .expect("chess position squares are filled once");
            }
        }
        board
    }};
}
