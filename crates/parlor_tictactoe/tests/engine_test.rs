//! Tests for the computer opponent's priority chain.

use parlor_tictactoe::{Board, Marker, Position, Rule, choose_move, decide};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn marker(c: char) -> Marker {
    Marker::new(c).expect("valid marker")
}

fn board_with(cells: &[(u8, char)]) -> Board {
    let mut board = Board::new();
    for &(number, symbol) in cells {
        board
            .assign_number(number, marker(symbol))
            .expect("cell should be free");
    }
    board
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

#[test]
fn test_empty_board_takes_center() {
    let decision = decide(&Board::new(), marker('O'), marker('X'), &mut rng()).unwrap();
    assert_eq!(decision.position, Position::Center);
    assert_eq!(decision.rule, Rule::Center);
}

#[test]
fn test_completes_own_diagonal() {
    // O holds 1 and 5, so the main diagonal is open at 9.
    let board = board_with(&[(1, 'O'), (5, 'O'), (3, 'X'), (4, 'X')]);
    let decision = decide(&board, marker('O'), marker('X'), &mut rng()).unwrap();
    assert_eq!(decision.position, Position::BottomRight);
    assert_eq!(decision.rule, Rule::Win);
}

#[test]
fn test_blocks_opponent_column() {
    // X holds 2 and 5, so the middle column is open at 8.
    let board = board_with(&[(2, 'X'), (5, 'X'), (1, 'O')]);
    let decision = decide(&board, marker('O'), marker('X'), &mut rng()).unwrap();
    assert_eq!(decision.position, Position::BottomCenter);
    assert_eq!(decision.rule, Rule::Block);
}

#[test]
fn test_win_outranks_block() {
    // O can win at 6 on the middle row; X threatens 3 on the top row.
    let board = board_with(&[(4, 'O'), (5, 'O'), (1, 'X'), (2, 'X')]);
    assert_eq!(
        choose_move(&board, marker('O'), marker('X'), &mut rng()),
        Some(Position::MiddleRight)
    );
}

#[test]
fn test_center_outranks_block() {
    // X threatens 3 but the center is still open.
    let board = board_with(&[(1, 'X'), (2, 'X'), (9, 'O')]);
    let decision = decide(&board, marker('O'), marker('X'), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::Center);
    assert_eq!(decision.position, Position::Center);
}

#[test]
fn test_first_opportunity_in_scan_order() {
    // O can win at 3 (top row) or at 7 (first column); the row comes first.
    let board = board_with(&[(1, 'O'), (2, 'O'), (4, 'O'), (5, 'X'), (6, 'X'), (9, 'X')]);
    assert_eq!(
        choose_move(&board, marker('O'), marker('X'), &mut rng()),
        Some(Position::TopRight)
    );
}

#[test]
fn test_first_threat_in_scan_order() {
    // X threatens 3 on the top row and 7 on the first column. O's middle
    // row is already blocked at 4.
    let board = board_with(&[(1, 'X'), (2, 'X'), (5, 'O'), (6, 'O'), (4, 'X')]);
    let decision = decide(&board, marker('O'), marker('X'), &mut rng()).unwrap();
    assert_eq!(decision.rule, Rule::Block);
    assert_eq!(decision.position, Position::TopRight);
}

#[test]
fn test_chosen_cell_is_always_empty() {
    let board = board_with(&[(1, 'X'), (5, 'O'), (9, 'X')]);
    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cell = choose_move(&board, marker('O'), marker('X'), &mut rng).unwrap();
        assert!(board.empty_cells().contains(&cell));
    }
}
