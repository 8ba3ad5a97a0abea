//! Pseudo-legal move generation and attack detection over a `Board`.

pub mod generator;

pub use generator::{
    generate_piece_moves, generate_pseudo_legal_moves, is_square_attacked, ChessMoveList,
};
