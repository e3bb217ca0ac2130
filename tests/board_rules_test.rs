//! Test suite for the board model
//! Validates the game-rule invariants visible through the public API

use rand::{Rng, SeedableRng, rngs::StdRng};
use tictactoe_solver::{Board, Cell, Player, Square};

/// Count X and O pieces through the public cell array
fn piece_counts(board: &Board) -> (usize, usize) {
    let x = board.cells.iter().filter(|&&c| c == Cell::X).count();
    let o = board.cells.iter().filter(|&&c| c == Cell::O).count();
    (x, o)
}

#[test]
fn alternation_invariant_holds_along_random_playouts() {
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new();

        while !board.is_terminal() {
            let (x, o) = piece_counts(&board);
            assert!(
                x == o || x == o + 1,
                "piece counts X={x}, O={o} violate alternation in '{}'",
                board.encode()
            );
            assert!(board.is_valid(), "reachable board should be valid");

            let moves = board.legal_moves();
            let square = moves[rng.random_range(0..moves.len())];
            board = board
                .make_move(square)
                .expect("moves from legal_moves() must apply cleanly");
        }

        let (x, o) = piece_counts(&board);
        assert!(x == o || x == o + 1);
    }
}

#[test]
fn legal_move_counts_at_the_extremes() {
    assert_eq!(Board::new().legal_moves().len(), 9);

    let full = Board::from_string("XOXXOOOXX").unwrap();
    assert!(full.legal_moves().is_empty());
}

#[test]
fn applying_a_legal_move_never_fails() {
    // Exhaustive one-ply check from a few mid-game positions
    for encoded in ["X...O....", "XOX.X.O..", "XO.......", "........."] {
        let board = Board::from_string(encoded).unwrap();
        for square in board.legal_moves() {
            assert!(
                board.make_move(square).is_ok(),
                "legal move {square} rejected on '{encoded}'"
            );
        }
    }
}

#[test]
fn occupied_and_out_of_range_moves_always_fail() {
    let board = Board::from_string("X........").unwrap();

    assert!(board.make_move(Square::new(0, 0)).is_err(), "occupied cell");
    assert!(board.make_move(Square::new(3, 1)).is_err(), "row out of range");
    assert!(board.make_move(Square::new(1, 3)).is_err(), "col out of range");
    assert!(board.make_move(Square::new(9, 9)).is_err());
}

#[test]
fn make_move_leaves_the_input_board_unchanged() {
    let board = Board::from_string("X...O....").unwrap();
    let encoded = board.encode();

    let next = board.make_move(Square::new(2, 2)).unwrap();
    assert_eq!(board.encode(), encoded, "input board must not be mutated");
    assert_ne!(next, board);
}

#[test]
fn to_move_derivation_matches_play() {
    let mut board = Board::new();
    let mut expected = Player::X;

    for square in [
        Square::new(1, 1),
        Square::new(0, 0),
        Square::new(2, 2),
        Square::new(0, 2),
    ] {
        assert_eq!(board.to_move(), expected);
        board = board.make_move(square).unwrap();
        expected = expected.opponent();
    }
}

#[test]
fn parse_encode_roundtrip() {
    for encoded in [".........", "X........", "XOX.O.X..", "XOXXOOOXX"] {
        let board = Board::from_string(encoded).unwrap();
        assert_eq!(board.encode(), encoded);
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }
}

#[test]
fn parsing_rejects_malformed_boards() {
    assert!(Board::from_string("").is_err());
    assert!(Board::from_string("XOX").is_err());
    assert!(Board::from_string("XOZ......").is_err());
    assert!(Board::from_string("OOO......").is_err());
    assert!(Board::from_string("XXX......").is_err());
}

#[test]
fn reachable_state_count_matches_known_result() {
    // 5478 distinct positions are reachable by legal play, counting the
    // empty board and all terminal positions.
    assert_eq!(Board::count_reachable_states(), 5478);
}
