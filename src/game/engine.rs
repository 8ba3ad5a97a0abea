use log::{debug, info, warn};
use thiserror::Error;

use crate::board::{Board, Color, Square};
use crate::chess_move::ChessMove;
use crate::game::state::GameState;
use crate::move_generator::ChessMoveList;

/// Configuration the engine is started with
#[derive(Clone, Default)]
pub struct EngineConfig {
    pub starting_position: GameState,
}

#[derive(Error, Debug, PartialEq)]
pub enum EngineError {
    #[error("{from}{to} is not a legal move")]
    InvalidMove { from: Square, to: Square },
}

/// Drives a game: owns the `GameState` and the legal moves for the
/// current ply, which are recomputed whenever a move is made or taken back.
pub struct Engine {
    state: GameState,
    valid_moves: ChessMoveList,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        let state = config.starting_position;
        info!("starting game with {} to move", state.turn());
        let valid_moves = state.get_valid_moves();
        Self { state, valid_moves }
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    pub fn valid_moves(&self) -> &ChessMoveList {
        &self.valid_moves
    }

    pub fn has_valid_moves(&self) -> bool {
        !self.valid_moves.is_empty()
    }

    pub fn is_in_check(&self) -> bool {
        self.state.in_check()
    }

    pub fn last_move(&self) -> Option<ChessMove> {
        self.state.last_move().copied()
    }

    pub fn make_move_by_squares(
        &mut self,
        from: Square,
        to: Square,
    ) -> Result<ChessMove, EngineError> {
        let chess_move = match self
            .valid_moves
            .iter()
            .find(|m| m.from_square() == from && m.to_square() == to)
        {
            Some(chess_move) => *chess_move,
            None => {
                warn!("rejected {}{} for {}", from, to, self.state.turn());
                return Err(EngineError::InvalidMove { from, to });
            }
        };

        self.state.apply_move(chess_move);
        self.refresh_valid_moves();
        debug!("applied {}", chess_move);

        Ok(chess_move)
    }

    /// Takes back the last move. Returns `None` when nothing has been played.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let undone = self.state.undo_move()?;
        self.refresh_valid_moves();
        debug!("undid {}", undone);
        Some(undone)
    }

    fn refresh_valid_moves(&mut self) {
        self.valid_moves = self.state.get_valid_moves();
    }
}
