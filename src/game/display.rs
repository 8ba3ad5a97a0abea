use termion::{clear, cursor};

use crate::board::{Board, Color, Square};
use crate::chess_move::ChessMove;

/// Terminal renderer for the board and the status lines below it.
pub struct GameDisplay {
    buffer: String,
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<&ChessMove>,
        in_check: bool,
        status: Option<&str>,
    ) {
        self.clear();
        self.draw(board, current_turn, last_move, in_check, status);
        print!("{}", self.buffer);
    }

    /// Lays out the frame without touching the terminal.
    pub fn draw(
        &mut self,
        board: &Board,
        current_turn: Color,
        last_move: Option<&ChessMove>,
        in_check: bool,
        status: Option<&str>,
    ) {
        self.buffer.push_str("    a   b   c   d   e   f   g   h\n");
        self.buffer
            .push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        // row 0 is rank 8, drawn first
        for row in 0..8u8 {
            let rank = 8 - row;
            self.buffer.push_str(&format!("{} │", rank));
            for col in 0..8u8 {
                let piece_str = match board.get(Square::new(row, col)) {
                    Some((piece, color)) => piece.to_unicode_piece_char(color).to_string(),
                    None => if (row + col) % 2 == 0 { " " } else { "·" }.to_string(),
                };
                self.buffer.push_str(&format!(" {} │", piece_str));
            }
            self.buffer.push_str(&format!(" {}\n", rank));

            if row < 7 {
                self.buffer
                    .push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            } else {
                self.buffer
                    .push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
            }
        }

        self.buffer
            .push_str("    a   b   c   d   e   f   g   h\n\n");

        self.buffer.push_str(&format!("Turn: {}\n", current_turn));
        if in_check {
            self.buffer.push_str("Check!\n");
        }
        if let Some(chess_move) = last_move {
            self.buffer
                .push_str(&format!("Last move: {}\n", chess_move.to_notation()));
        }
        if let Some(status) = status {
            self.buffer.push_str(&format!("\n{}\n", status));
        }
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}
