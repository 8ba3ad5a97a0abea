use super::square::*;
use super::*;

#[test]
fn test_starting_position_layout() {
    let board = Board::starting_position();

    assert_eq!(Some((Piece::Rook, Color::Black)), board.get(A8));
    assert_eq!(Some((Piece::King, Color::Black)), board.get(E8));
    assert_eq!(Some((Piece::Queen, Color::Black)), board.get(D8));
    assert_eq!(Some((Piece::King, Color::White)), board.get(E1));
    assert_eq!(Some((Piece::Queen, Color::White)), board.get(D1));
    assert_eq!(Some((Piece::Knight, Color::White)), board.get(B1));

    for col in 0..8 {
        assert_eq!(
            Some((Piece::Pawn, Color::Black)),
            board.get(Square::new(1, col))
        );
        assert_eq!(
            Some((Piece::Pawn, Color::White)),
            board.get(Square::new(6, col))
        );
        for row in 2..6 {
            assert_eq!(None, board.get(Square::new(row, col)));
        }
    }

    assert_eq!(32, board.pieces().count());
}

#[test]
fn test_display_uses_two_character_codes() {
    let board = Board::starting_position();
    let rendered = format!("{}", board);
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(8, lines.len());
    assert_eq!("bR bN bB bQ bK bB bN bR", lines[0]);
    assert_eq!("bp bp bp bp bp bp bp bp", lines[1]);
    assert_eq!("-- -- -- -- -- -- -- --", lines[4]);
    assert_eq!("wR wN wB wQ wK wB wN wR", lines[7]);
}

#[test]
fn test_put() {
    let mut board = Board::new();
    assert!(!board.is_occupied(D4));

    board.put(D4, Piece::Knight, Color::White).unwrap();
    assert!(board.is_occupied(D4));
    assert_eq!(Some((Piece::Knight, Color::White)), board.get(D4));
}

#[test]
fn test_put_on_occupied_square_fails() {
    let mut board = Board::new();
    board.put(D4, Piece::Knight, Color::White).unwrap();

    let result = board.put(D4, Piece::Bishop, Color::Black);
    assert_eq!(
        Err(BoardError::SquareOccupiedBoardPutError { square: D4 }),
        result
    );
    assert_eq!(Some((Piece::Knight, Color::White)), board.get(D4));
}

#[test]
fn test_find_king() {
    let board = Board::starting_position();
    assert_eq!(Ok(E1), board.find_king(Color::White));
    assert_eq!(Ok(E8), board.find_king(Color::Black));

    let empty = Board::new();
    assert_eq!(
        Err(BoardError::KingCountError {
            color: Color::White,
            count: 0
        }),
        empty.find_king(Color::White)
    );

    let two_kings = crate::chess_position! {
        k......k
        ........
        ........
        ........
        ........
        ........
        ........
        ....K...
    };
    assert_eq!(
        Err(BoardError::KingCountError {
            color: Color::Black,
            count: 2
        }),
        two_kings.find_king(Color::Black)
    );
}

#[test]
fn test_chess_position_macro_orientation() {
    let board = crate::chess_position! {
        ....k...
        ........
        ........
        ........
        ....P...
        ........
        ........
        r...K...
    };

    assert_eq!(Some((Piece::King, Color::Black)), board.get(E8));
    assert_eq!(Some((Piece::Pawn, Color::White)), board.get(E4));
    assert_eq!(Some((Piece::Rook, Color::Black)), board.get(A1));
    assert_eq!(Some((Piece::King, Color::White)), board.get(Square::new(7, 4)));
    assert_eq!(4, board.pieces().count());
}
