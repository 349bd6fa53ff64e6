//! Tests for Alligator Chess move rules and win detection.

use alligator_chess::rules::{all_legal_moves, apply_move, check_outcome, is_legal};
use alligator_chess::{Board, Cell, Move, Outcome, Position, Side, WinReason};
use strum::IntoEnumIterator;

fn board(notation: &str) -> Board {
    notation.parse().expect("valid notation")
}

/// Board with a lone piece of `side` on `pos`.
fn lone(side: Side, pos: Position) -> Board {
    let mut b = Board::empty();
    b.set(pos, Cell::Occupied(side)).unwrap();
    b
}

#[test]
fn test_off_board_destinations_always_illegal() {
    for side in Side::iter() {
        for from in Position::ALL {
            let b = lone(side, from);
            for row in -3..6 {
                for col in -3..6 {
                    let to = Position::new(row, col);
                    if !to.is_on_board() {
                        assert!(!is_legal(&b, from, to), "{:?} {} -> {}", side, from, to);
                    }
                }
            }
        }
    }
}

#[test]
fn test_forward_step_shape() {
    for side in Side::iter() {
        for from in Position::ALL {
            let b = lone(side, from);
            for to in Position::ALL {
                let mv = Move::new(from, to);
                let expected =
                    mv.d_row() == i16::from(side.forward()) && mv.d_col() == 0;
                assert_eq!(is_legal(&b, from, to), expected, "{:?} {}", side, mv);
            }
        }
    }
}

#[test]
fn test_diagonal_requires_opposing_piece() {
    for side in Side::iter() {
        let from = Position::new(1, 1);
        for d_col in [-1, 1] {
            let to = from.offset(side.forward(), d_col);

            let mut b = lone(side, from);
            assert!(!is_legal(&b, from, to), "diagonal onto empty");

            b.set(to, Cell::Occupied(side)).unwrap();
            assert!(!is_legal(&b, from, to), "diagonal onto own piece");

            b.set(to, Cell::Occupied(side.opponent())).unwrap();
            assert!(is_legal(&b, from, to), "diagonal capture");
        }
    }
}

#[test]
fn test_straight_ahead_never_captures() {
    let b = board(".../.A./.M.");
    assert!(!is_legal(&b, Position::new(2, 1), Position::new(1, 1)));
    assert!(!is_legal(&b, Position::new(1, 1), Position::new(2, 1)));
}

#[test]
fn test_legal_moves_only_from_queried_side() {
    for notation in ["AAA/.../MMM", "A.A/.M./M.M", ".A./AMA/M.M", "..A/MA./..M"] {
        let b = board(notation);
        for side in Side::iter() {
            for mv in all_legal_moves(side, &b) {
                assert_eq!(b.get(mv.from), Some(Cell::Occupied(side)), "{}", notation);
                assert!(is_legal(&b, mv.from, mv.to));
            }
        }
    }
}

#[test]
fn test_legal_moves_recomputed_per_board() {
    let before = Board::initial();
    let after = apply_move(&before, Move::new(Position::new(2, 1), Position::new(1, 1))).unwrap();
    assert_eq!(all_legal_moves(Side::Alligator, &before).len(), 3);
    // (0,0) and (0,2) can now capture on (1,1); (0,1) is blocked.
    assert_eq!(
        all_legal_moves(Side::Alligator, &after),
        vec![
            Move::new(Position::new(0, 0), Position::new(1, 0)),
            Move::new(Position::new(0, 0), Position::new(1, 1)),
            Move::new(Position::new(0, 2), Position::new(1, 1)),
            Move::new(Position::new(0, 2), Position::new(1, 2)),
        ]
    );
}

#[test]
fn test_applied_board_is_independent() {
    let original = Board::initial();
    let mut next = apply_move(&original, Move::new(Position::new(2, 2), Position::new(1, 2))).unwrap();
    next.set(Position::new(0, 0), Cell::Empty).unwrap();
    assert_eq!(original, Board::initial());
}

#[test]
fn test_monkey_breakthrough_with_alligators_left() {
    for col in 0..3 {
        let mut b = board(".../A.A/...");
        b.set(Position::new(0, col), Cell::Occupied(Side::Monkey)).unwrap();
        assert_eq!(
            check_outcome(&b),
            Some(Outcome::new(Side::Monkey, WinReason::Breakthrough))
        );
    }
}

#[test]
fn test_alligator_breakthrough() {
    for col in 0..3 {
        let mut b = board(".../M.M/...");
        b.set(Position::new(2, col), Cell::Occupied(Side::Alligator)).unwrap();
        assert_eq!(
            check_outcome(&b),
            Some(Outcome::new(Side::Alligator, WinReason::Breakthrough))
        );
    }
}

#[test]
fn test_annihilation_both_ways() {
    assert_eq!(
        check_outcome(&board(".../M../..M")),
        Some(Outcome::new(Side::Monkey, WinReason::Annihilation))
    );
    assert_eq!(
        check_outcome(&board("A../..A/...")),
        Some(Outcome::new(Side::Alligator, WinReason::Annihilation))
    );
}

#[test]
fn test_blocked_alligators_lose_with_monkey_to_move() {
    // Every Alligator is blocked head-on with nothing to capture, while the
    // Monkey on (2,1) can still step. Whose turn it is does not matter.
    let b = board("A.A/M.M/.M.");
    assert!(all_legal_moves(Side::Alligator, &b).is_empty());
    assert_eq!(all_legal_moves(Side::Monkey, &b).len(), 1);
    assert_eq!(
        check_outcome(&b),
        Some(Outcome::new(Side::Monkey, WinReason::Stalemate))
    );
}

#[test]
fn test_monkey_tested_first_when_both_blocked() {
    let b = board("A.A/M.M/...");
    assert!(all_legal_moves(Side::Monkey, &b).is_empty());
    assert!(all_legal_moves(Side::Alligator, &b).is_empty());
    assert_eq!(
        check_outcome(&b),
        Some(Outcome::new(Side::Alligator, WinReason::Stalemate))
    );
}
