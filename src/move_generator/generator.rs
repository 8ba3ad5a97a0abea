//! Per-piece pseudo-legal move generation.
//!
//! Nothing here looks at king safety: a generated move may leave the mover's
//! own king attacked. `GameState::get_valid_moves` filters those out.

use smallvec::SmallVec;

use crate::board::{Board, Color, Piece, Square};
use crate::chess_move::ChessMove;

/// A list of chess moves that is optimized for small sizes.
pub type ChessMoveList = SmallVec<[ChessMove; 32]>;

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];
const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Every pseudo-legal move available to `color`, in board scan order.
pub fn generate_pseudo_legal_moves(board: &Board, color: Color) -> ChessMoveList {
    let mut moves = ChessMoveList::new();
    for (square, piece, owner) in board.pieces() {
        if owner == color {
            generate_piece_moves(board, square, piece, color, &mut moves);
        }
    }
    moves
}

/// Appends the pseudo-legal moves of the `piece` standing on `from`.
pub fn generate_piece_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    color: Color,
    moves: &mut ChessMoveList,
) {
    match piece {
        Piece::Pawn => generate_pawn_moves(board, from, color, moves),
        Piece::Rook => generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, moves),
        Piece::Bishop => generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, moves),
        Piece::Queen => {
            generate_sliding_moves(board, from, color, &ROOK_DIRECTIONS, moves);
            generate_sliding_moves(board, from, color, &BISHOP_DIRECTIONS, moves);
        }
        Piece::Knight => generate_step_moves(board, from, color, &KNIGHT_OFFSETS, moves),
        Piece::King => generate_step_moves(board, from, color, &KING_OFFSETS, moves),
    }
}

/// True if any pseudo-legal move of `attacker` lands on `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    generate_pseudo_legal_moves(board, attacker)
        .iter()
        .any(|chess_move| chess_move.to_square() == square)
}

fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut ChessMoveList) {
    let direction = color.pawn_direction();

    // a pawn on the far rank has nowhere to go without promotion
    let single_step = match from.offset(direction, 0) {
        Some(square) => square,
        None => return,
    };

    if !board.is_occupied(single_step) {
        moves.push(ChessMove::new(from, single_step, board));

        if from.row() == color.pawn_home_row() {
            if let Some(double_step) = from.offset(2 * direction, 0) {
                if !board.is_occupied(double_step) {
                    moves.push(ChessMove::new(from, double_step, board));
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(direction, d_col) {
            if let Some((_, occupant)) = board.get(target) {
                if occupant != color {
                    moves.push(ChessMove::new(from, target, board));
                }
            }
        }
    }
}

fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut ChessMoveList,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(target) = current.offset(d_row, d_col) {
            match board.get(target) {
                None => moves.push(ChessMove::new(from, target, board)),
                Some((_, occupant)) => {
                    if occupant != color {
                        moves.push(ChessMove::new(from, target, board));
                    }
                    break;
                }
            }
            current = target;
        }
    }
}

fn generate_step_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut ChessMoveList,
) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            match board.get(target) {
                Some((_, occupant)) if occupant == color => {}
                _ => moves.push(ChessMove::new(from, target, board)),
            }
        }
    }
}
