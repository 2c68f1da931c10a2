use tictactoe::{evaluate, Board, BoardError, Cell, Outcome, Player, LINES};

#[test]
fn new_board_is_empty_and_in_progress() {
    let board = Board::new();
    for r in 0..3 {
        for c in 0..3 {
            assert_eq!(board.get(r, c).unwrap(), Cell::Empty);
        }
    }
    assert_eq!(evaluate(&board), Outcome::InProgress);
}

#[test]
fn place_changes_only_the_target_cell() {
    let board = Board::new();
    let next = board.place(1, 1, Player::X).unwrap();
    assert_eq!(next.get(1, 1).unwrap(), Cell::Marked(Player::X));
    for r in 0..3 {
        for c in 0..3 {
            if (r, c) != (1, 1) {
                assert_eq!(next.get(r, c).unwrap(), board.get(r, c).unwrap());
            }
        }
    }
}

#[test]
fn place_on_occupied_cell_is_a_no_op() {
    let board = Board::new().place(0, 0, Player::X).unwrap();
    let next = board.place(0, 0, Player::O).unwrap();
    assert_eq!(next, board);
    assert_eq!(next.get(0, 0).unwrap(), Cell::Marked(Player::X));
}

#[test]
fn place_never_mutates_its_input() {
    let board = Board::new();
    let before = board;
    let _ = board.place(2, 2, Player::O).unwrap();
    assert_eq!(board, before);
    assert_eq!(board.get(2, 2).unwrap(), Cell::Empty);
}

#[test]
fn out_of_range_coordinates_fail_fast() {
    let board = Board::new();
    assert_eq!(
        board.place(3, 0, Player::X).unwrap_err(),
        BoardError::OutOfBounds { row: 3, col: 0 }
    );
    assert_eq!(
        board.get(0, 3).unwrap_err(),
        BoardError::OutOfBounds { row: 0, col: 3 }
    );
    // a failed place leaves no mark anywhere
    assert_eq!(board, Board::new());
}

#[test]
fn mark_counts_track_each_player() {
    let board = Board::new()
        .place(0, 0, Player::X)
        .unwrap()
        .place(1, 1, Player::O)
        .unwrap()
        .place(0, 1, Player::X)
        .unwrap();
    assert_eq!(board.count(Player::X), 2);
    assert_eq!(board.count(Player::O), 1);
    assert!(!board.is_full());
}

#[test]
fn top_row_sequence_ends_in_a_win_for_x() {
    let moves = [
        (0, 0, Player::X),
        (1, 1, Player::O),
        (0, 1, Player::X),
        (2, 2, Player::O),
        (0, 2, Player::X),
    ];
    let mut board = Board::new();
    for (r, c, p) in moves {
        board = board.place(r, c, p).unwrap();
    }
    assert_eq!(
        evaluate(&board),
        Outcome::Win {
            player: Player::X,
            line: LINES[0],
        }
    );
    assert_eq!(LINES[0].cells(), [(0, 0), (0, 1), (0, 2)]);
}
