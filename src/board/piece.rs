use super::color::Color;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub enum Piece {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Piece {
    /// Second character of the two-character piece code. Pawns use a
    /// lowercase `p`, every other kind an uppercase letter.
    pub fn code(&self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Rook => 'R',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        }
    }

    /// Two-character code such as `wp` or `bK`.
    pub fn to_code(&self, color: Color) -> String {
        format!("{}{}", color.code(), self.code())
    }

    pub fn from_fen(c: char) -> Option<(Piece, Color)> {
        let piece = match c.to_ascii_lowercase() {
            'p' => Piece::Pawn,
            'r' => Piece::Rook,
            'n' => Piece::Knight,
            'b' => Piece::Bishop,
            'q' => Piece::Queen,
            'k' => Piece::King,
            _ => return None,
        };
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some((piece, color))
    }

    pub fn to_unicode_piece_char(&self, color: Color) -> char {
        match (self, color) {
            (Piece::Pawn, Color::White) => '♙',
            (Piece::Rook, Color::White) => '♖',
            (Piece::Knight, Color::White) => '♘',
            (Piece::Bishop, Color::White) => '♗',
            (Piece::Queen, Color::White) => '♕',
            (Piece::King, Color::White) => '♔',
            (Piece::Pawn, Color::Black) => '♟',
            (Piece::Rook, Color::Black) => '♜',
            (Piece::Knight, Color::Black) => '♞',
            (Piece::Bishop, Color::Black) => '♝',
            (Piece::Queen, Color::Black) => '♛',
            (Piece::King, Color::Black) => '♚',
        }
    }
}
