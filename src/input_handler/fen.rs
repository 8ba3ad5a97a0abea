use log::debug;
use thiserror::Error;

use crate::board::{error::BoardError, Board, Color, Piece, Square};
use crate::game::state::GameState;

#[derive(Error, Debug, PartialEq)]
pub enum FenParseError {
    #[error("Wrong number of fields: 2 to 6 expected, {field_count:?} given")]
    WrongNumberOfFields { field_count: usize },
    #[error("Invalid piece character: {invalid_character:?}")]
    InvalidPieceCharacter { invalid_character: char },
    #[error("Wrong number of ranks: 8 expected, {rank_count:?} given")]
    InvalidRankCount { rank_count: usize },
    #[error("Rank too long: {invalid_rank:?}")]
    InvalidRankLength { invalid_rank: String },
    #[error("Rank incomplete: {incomplete_rank:?}")]
    IncompleteRank { incomplete_rank: String },
    #[error("Invalid color: {invalid_color:?}")]
    InvalidColor { invalid_color: String },
    #[error("Invalid castling rights: {invalid_castling:?}")]
    InvalidCastlingRights { invalid_castling: String },
    #[error("Invalid en passant square: {value:?}")]
    InvalidEnPassant { value: String },
    #[error("Invalid move counter: {invalid_counter:?}")]
    InvalidMoveCounter { invalid_counter: String },
    #[error("Invalid position: {board_error}")]
    InvalidPosition { board_error: BoardError },
}

type FenResult<T> = Result<T, FenParseError>;

pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Parses a FEN (Forsyth–Edwards Notation) string into a `GameState`.
///
/// Only the piece placement and active color take effect. Castling rights,
/// the en passant square and the move counters may be present and must be
/// well formed, but this engine has no use for them.
pub fn parse_fen(fen: &str) -> FenResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if !(2..=6).contains(&fields.len()) {
        return Err(FenParseError::WrongNumberOfFields {
            field_count: fields.len(),
        });
    }

    let board = parse_piece_placement(fields[0])?;
    let turn = parse_active_color(fields[1])?;

    if let Some(castle_rights) = fields.get(2) {
        check_castle_rights(castle_rights)?;
    }
    if let Some(en_passant) = fields.get(3) {
        check_en_passant(en_passant)?;
    }
    for counter in fields.iter().skip(4) {
        check_move_counter(counter)?;
    }
    if fields.len() > 2 {
        debug!("ignoring castling, en passant and clock fields of {:?}", fen);
    }

    GameState::from_board(board, turn)
        .map_err(|board_error| FenParseError::InvalidPosition { board_error })
}

/// Maps a FEN piece character to its corresponding piece type and color
fn parse_piece_char(c: char) -> FenResult<(Piece, Color)> {
    Piece::from_fen(c).ok_or(FenParseError::InvalidPieceCharacter {
        invalid_character: c,
    })
}

/// Parses the piece placement section of the FEN string. The first rank
/// listed is rank 8, which is row 0 of the board.
fn parse_piece_placement(position: &str) -> FenResult<Board> {
    let ranks: Vec<&str> = position.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenParseError::InvalidRankCount {
            rank_count: ranks.len(),
        });
    }

    let mut board = Board::new();
    for (row, rank) in ranks.iter().enumerate() {
        parse_rank(&mut board, rank, row as u8)?;
    }

    Ok(board)
}

/// Parses a single rank of the piece placement section
fn parse_rank(board: &mut Board, rank: &str, row: u8) -> FenResult<()> {
    let mut col = 0u8;

    for c in rank.chars() {
        if col >= 8 {
            return Err(FenParseError::InvalidRankLength {
                invalid_rank: rank.to_string(),
            });
        }

        if let Some(empty_squares) = c.to_digit(10) {
            if !(1..=8).contains(&empty_squares) {
                return Err(FenParseError::InvalidPieceCharacter {
                    invalid_character: c,
                });
            }
            col += empty_squares as u8;
        } else {
            let (piece, color) = parse_piece_char(c)?;
            board
                .put(Square::new(row, col), piece, color)
                .map_err(|board_error| FenParseError::InvalidPosition { board_error })?;
            col += 1;
        }
    }

    match col {
        8 => Ok(()),
        overflow if overflow > 8 => Err(FenParseError::InvalidRankLength {
            invalid_rank: rank.to_string(),
        }),
        _ => Err(FenParseError::IncompleteRank {
            incomplete_rank: rank.to_string(),
        }),
    }
}

/// Parses the active color field
fn parse_active_color(active_color: &str) -> FenResult<Color> {
    match active_color {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(FenParseError::InvalidColor {
            invalid_color: active_color.to_string(),
        }),
    }
}

fn check_castle_rights(castle_rights: &str) -> FenResult<()> {
    let valid = castle_rights == "-"
        || (!castle_rights.is_empty() && castle_rights.chars().all(|c| "KQkq".contains(c)));
    if valid {
        Ok(())
    } else {
        Err(FenParseError::InvalidCastlingRights {
            invalid_castling: castle_rights.to_string(),
        })
    }
}

fn check_en_passant(en_passant: &str) -> FenResult<()> {
    if en_passant == "-" || Square::from_algebraic(en_passant).is_some() {
        Ok(())
    } else {
        Err(FenParseError::InvalidEnPassant {
            value: en_passant.to_string(),
        })
    }
}

fn check_move_counter(counter: &str) -> FenResult<()> {
    counter
        .parse::<u32>()
        .map(|_| ())
        .map_err(|_| FenParseError::InvalidMoveCounter {
            invalid_counter: counter.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::square::*;

    #[test]
    fn test_parse_starting_position() {
        let state = parse_fen(STARTING_POSITION_FEN).unwrap();
        assert_eq!(GameState::new(), state);
    }

    #[test]
    fn test_parse_complex_position() {
        let fen = "r1bqk2r/ppp2ppp/2n2n2/2bpp3/4P3/2PP1N2/PP1N1PPP/R1BQKB1R b KQkq - 0 6";
        let state = parse_fen(fen).unwrap();

        assert_eq!(Color::Black, state.turn());
        assert_eq!(Some((Piece::Rook, Color::Black)), state.board().get(A8));
        assert_eq!(Some((Piece::Pawn, Color::Black)), state.board().get(E5));
        assert_eq!(Some((Piece::Knight, Color::White)), state.board().get(D2));
        assert_eq!(E1, state.king_location(Color::White));
        assert_eq!(E8, state.king_location(Color::Black));
    }

    #[test]
    fn test_placement_and_color_are_enough() {
        let state = parse_fen("4k3/8/8/8/8/8/8/4K3 b").unwrap();
        assert_eq!(Color::Black, state.turn());
        assert_eq!(2, state.board().pieces().count());
    }

    #[test]
    fn test_invalid_fen() {
        assert_eq!(
            Err(FenParseError::WrongNumberOfFields { field_count: 1 }),
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR")
        );
        assert_eq!(
            Err(FenParseError::IncompleteRank {
                incomplete_rank: "RNBQKBN".to_string()
            }),
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBN w KQkq - 0 1")
        );
        assert_eq!(
            Err(FenParseError::InvalidColor {
                invalid_color: "x".to_string()
            }),
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1")
        );
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XYZx - 0 1"),
            Err(FenParseError::InvalidCastlingRights { .. })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq z9 0 1"),
            Err(FenParseError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1"),
            Err(FenParseError::InvalidMoveCounter { .. })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKXNR w KQkq - 0 1"),
            Err(FenParseError::InvalidPieceCharacter {
                invalid_character: 'X'
            })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidRankLength { .. })
        ));
        assert!(matches!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(FenParseError::InvalidRankCount { rank_count: 7 })
        ));
    }

    #[test]
    fn test_empty_square_count_must_be_one_to_eight() {
        assert_eq!(
            Err(FenParseError::InvalidPieceCharacter {
                invalid_character: '0'
            }),
            parse_fen("4k3/08/8/8/8/8/8/4K3 w - - 0 1")
        );
        assert_eq!(
            Err(FenParseError::InvalidPieceCharacter {
                invalid_character: '9'
            }),
            parse_fen("4k3/9/8/8/8/8/8/4K3 w - - 0 1")
        );
    }

    #[test]
    fn test_missing_king_is_rejected() {
        assert_eq!(
            Err(FenParseError::InvalidPosition {
                board_error: BoardError::KingCountError {
                    color: Color::Black,
                    count: 0
                }
            }),
            parse_fen("8/8/8/8/8/8/8/4K3 w - - 0 1")
        );
    }
}
