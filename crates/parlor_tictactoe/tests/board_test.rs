//! Tests for board queries and round evaluation.

use parlor_tictactoe::{Board, Marker, Position, RoundOutcome, Side};

fn x() -> Marker {
    Marker::new('X').unwrap()
}

fn o() -> Marker {
    Marker::new('O').unwrap()
}

fn drawn_board() -> Board {
    // X O X / X O O / O X X
    let mut board = Board::new();
    for (number, marker) in [
        (1, x()),
        (2, o()),
        (3, x()),
        (4, x()),
        (5, o()),
        (6, o()),
        (7, o()),
        (8, x()),
        (9, x()),
    ] {
        board.assign_number(number, marker).unwrap();
    }
    board
}

#[test]
fn test_full_board_without_line_is_a_tie() {
    let board = drawn_board();
    assert_eq!(board.winner(), None);
    assert!(board.is_full());
    assert!(board.empty_cells().is_empty());
    assert_eq!(RoundOutcome::from_board(&board, x(), o()), Some(RoundOutcome::Tie));
}

#[test]
fn test_empty_cells_filters_occupied() {
    let mut board = Board::new();
    board.assign(Position::TopLeft, x()).unwrap();
    board.assign(Position::Center, o()).unwrap();

    let empty = board.empty_cells();
    assert_eq!(empty.len(), 7);
    assert!(!empty.contains(&Position::TopLeft));
    assert!(!empty.contains(&Position::Center));
    assert!(empty.contains(&Position::BottomRight));
}

#[test]
fn test_round_terminal_on_win_before_full() {
    let mut board = Board::new();
    for number in [3, 5, 7] {
        board.assign_number(number, o()).unwrap();
    }
    board.assign_number(1, x()).unwrap();
    assert!(!board.is_full());
    assert_eq!(board.winner(), Some(o()));
    assert_eq!(
        RoundOutcome::from_board(&board, x(), o()),
        Some(RoundOutcome::Won(Side::Computer))
    );
}

#[test]
fn test_winning_last_move_on_full_board_is_a_win() {
    // X X X / O O X / X O O with the top row completed last.
    let mut board = Board::new();
    for (number, marker) in [
        (4, o()),
        (5, o()),
        (6, x()),
        (7, x()),
        (8, o()),
        (9, o()),
        (1, x()),
        (2, x()),
        (3, x()),
    ] {
        board.assign_number(number, marker).unwrap();
    }
    assert!(board.is_full());
    assert_eq!(
        RoundOutcome::from_board(&board, x(), o()),
        Some(RoundOutcome::Won(Side::Human))
    );
}

#[test]
fn test_near_complete_reports_threats_for_each_side() {
    let mut board = Board::new();
    board.assign_number(2, x()).unwrap();
    board.assign_number(5, x()).unwrap();
    board.assign_number(1, o()).unwrap();
    assert_eq!(board.near_complete(x()), vec![Position::BottomCenter]);
    assert!(board.near_complete(o()).is_empty());
}
