//! Rules of chess for a local two-player game: board representation, move
//! generation, legality filtering and check detection, with make/unmake
//! so moves can be taken back.
//!
//! Castling, en passant, promotion and end-of-game adjudication are not
//! part of these rules.

pub mod board;
pub mod chess_move;
pub mod game;
pub mod input_handler;
pub mod move_generator;
pub mod prelude;

use crate::chess_move::ChessMove;
use crate::game::state::GameState;
use crate::move_generator::ChessMoveList;

/// A game at the standard starting position with white to move.
pub fn new_game() -> GameState {
    GameState::new()
}

/// Every move the side to move may legally make.
pub fn legal_moves(state: &GameState) -> ChessMoveList {
    state.get_valid_moves()
}

pub fn apply(state: &mut GameState, chess_move: ChessMove) {
    state.apply_move(chess_move);
}

/// Takes back the last move, or does nothing if no move has been made.
pub fn undo(state: &mut GameState) -> Option<ChessMove> {
    state.undo_move()
}

pub fn in_check(state: &GameState) -> bool {
    state.in_check()
}

pub fn to_notation(chess_move: &ChessMove) -> String {
    chess_move.to_notation()
}
