//! The rules core: board, side to move, move log and cached king squares.

mod scoped_move;


use std::str::FromStr;

use rayon::prelude::*;

use crate::board::error::BoardError;
use crate::board::{Board, Color, Piece, Square};
use crate::chess_move::ChessMove;
use crate::input_handler::fen::{parse_fen, FenParseError};
use crate::move_generator::{generate_pseudo_legal_moves, is_square_attacked, ChessMoveList};

use scoped_move::ScopedMove;

/// A game in progress.
///
/// All mutation goes through `apply_move` and `undo_move`, which are exact
/// inverses of each other. Both keep the cached king squares in step with
/// the board.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    board: Board,
    turn: Color,
    move_log: Vec<ChessMove>,
    white_king_location: Square,
    black_king_location: Square,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// The standard starting position with white to move.
    pub fn new() -> Self {
        let board = Board::starting_position();
        Self {
            board,
            turn: Color::White,
            move_log: Vec::new(),
            white_king_location: Square::new(7, 4),
            black_king_location: Square::new(0, 4),
        }
    }

    /// Starts a game from an arbitrary placement. Each side needs exactly one king.
    pub fn from_board(board: Board, turn: Color) -> Result<Self, BoardError> {
        let white_king_location = board.find_king(Color::White)?;
        let black_king_location = board.find_king(Color::Black)?;

        Ok(Self {
            board,
            turn,
            move_log: Vec::new(),
            white_king_location,
            black_king_location,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn white_to_move(&self) -> bool {
        self.turn == Color::White
    }

    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&ChessMove> {
        self.move_log.last()
    }

    pub fn king_location(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king_location,
            Color::Black => self.black_king_location,
        }
    }

    fn set_king_location(&mut self, color: Color, square: Square) {
        match color {
            Color::White => self.white_king_location = square,
            Color::Black => self.black_king_location = square,
        }
    }

    /// Plays `chess_move` without checking it. Callers pass moves taken from
    /// `get_valid_moves`.
    pub fn apply_move(&mut self, chess_move: ChessMove) {
        debug_assert_eq!(
            Some(chess_move.piece_moved()),
            self.board.get(chess_move.from_square()),
            "move {} does not match the board",
            chess_move
        );

        self.board.set(chess_move.from_square(), None);
        self.board
            .set(chess_move.to_square(), Some(chess_move.piece_moved()));

        if let (Piece::King, color) = chess_move.piece_moved() {
            self.set_king_location(color, chess_move.to_square());
        }

        self.move_log.push(chess_move);
        self.turn = self.turn.opposite();
    }

    /// Takes back the most recent move. Returns `None`, leaving the state
    /// untouched, when there is nothing to take back.
    pub fn undo_move(&mut self) -> Option<ChessMove> {
        let chess_move = self.move_log.pop()?;

        self.board
            .set(chess_move.from_square(), Some(chess_move.piece_moved()));
        self.board
            .set(chess_move.to_square(), chess_move.piece_captured());

        if let (Piece::King, color) = chess_move.piece_moved() {
            self.set_king_location(color, chess_move.from_square());
        }

        self.turn = self.turn.opposite();
        Some(chess_move)
    }

    /// Moves that follow each piece's movement rules, ignoring king safety.
    pub fn get_all_possible_moves(&self) -> ChessMoveList {
        generate_pseudo_legal_moves(&self.board, self.turn)
    }

    /// Moves the side to move may actually play: the pseudo-legal moves that
    /// don't leave its own king attacked. The caller's state is not touched;
    /// each candidate is tried on a scratch copy.
    pub fn get_valid_moves(&self) -> ChessMoveList {
        let mut moves = self.get_all_possible_moves();
        let mut scratch = self.scratch();
        moves.retain(|chess_move| !scratch.exposes_own_king(chess_move));
        moves
    }

    /// Finds the valid move between two squares, if there is one.
    pub fn find_valid_move(&self, from: Square, to: Square) -> Option<ChessMove> {
        self.get_valid_moves()
            .into_iter()
            .find(|chess_move| chess_move.from_square() == from && chess_move.to_square() == to)
    }

    /// Whether the side to move has its king attacked.
    pub fn in_check(&self) -> bool {
        self.square_under_attack(self.king_location(self.turn))
    }

    /// Whether the opponent of the side to move could move onto `square`.
    pub fn square_under_attack(&self, square: Square) -> bool {
        is_square_attacked(&self.board, square, self.turn.opposite())
    }

    /// Counts the positions reached after every sequence of `depth` valid
    /// moves. Root moves are counted in parallel, each on its own copy.
    pub fn count_positions(&self, depth: u8) -> usize {
        if depth == 0 {
            return 1;
        }

        let candidates = self.get_valid_moves();
        if depth == 1 {
            return candidates.len();
        }

        candidates
            .as_slice()
            .par_iter()
            .map(|chess_move| {
                let mut local_state = self.scratch();
                local_state.apply_move(*chess_move);
                local_state.count_positions_inner(depth - 1)
            })
            .sum()
    }

    fn count_positions_inner(&mut self, depth: u8) -> usize {
        let candidates = self.get_valid_moves();
        if depth == 1 {
            return candidates.len();
        }

        let mut count = 0;
        for chess_move in candidates {
            self.apply_move(chess_move);
            count += self.count_positions_inner(depth - 1);
            self.undo_move();
        }
        count
    }

    /// Same position, empty history. Cheap to build since `Board` is `Copy`.
    fn scratch(&self) -> GameState {
        GameState {
            board: self.board,
            turn: self.turn,
            move_log: Vec::new(),
            white_king_location: self.white_king_location,
            black_king_location: self.black_king_location,
        }
    }

    fn exposes_own_king(&mut self, chess_move: &ChessMove) -> bool {
        let mover = self.turn;
        let applied = ScopedMove::apply(self, *chess_move);
        is_square_attacked(
            applied.board(),
            applied.king_location(mover),
            mover.opposite(),
        )
    }
}

impl FromStr for GameState {
    type Err = FenParseError;

    fn from_str(fen: &str) -> Result<Self, Self::Err> {
        parse_fen(fen)
    }
}
