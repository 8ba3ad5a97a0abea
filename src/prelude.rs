//! Common types re-exported for convenience.

pub use crate::board::{Board, Color, Piece, Square};
pub use crate::chess_move::ChessMove;
pub use crate::game::state::GameState;
pub use crate::move_generator::ChessMoveList;
