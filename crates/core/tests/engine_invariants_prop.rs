//! Property tests for the engine's core invariants.
//!
//! Covered:
//! - `collides` reports every cell outside the side walls or below the floor.
//! - A hard drop lands exactly where repeated one-row moves would stop.
//! - The landing row is stable: asking twice changes nothing.
//! - Random action sequences never leave a full row on the board, never
//!   leave the falling piece in an illegal spot, and only score in whole
//!   multiples of the line bonus.

use blockfall_core::{collides, Board, GameState, Phase, Piece, Position, TickOutcome};
use blockfall_core::types::{GameAction, PieceKind, LINE_CLEAR_BONUS};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = PieceKind> {
    (0..PieceKind::ALL.len()).prop_map(|i| PieceKind::ALL[i])
}

fn action_strategy() -> impl Strategy<Value = GameAction> {
    prop_oneof![
        4 => Just(GameAction::MoveLeft),
        4 => Just(GameAction::MoveRight),
        3 => Just(GameAction::SoftDrop),
        3 => Just(GameAction::Rotate),
        2 => Just(GameAction::HardDrop),
    ]
}

/// Random rubble in the lower half of a 10x20 board, never a full row.
fn rubble_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(any::<bool>(), 100).prop_map(|bits| {
        let mut board = Board::new(10, 20);
        for (i, filled) in bits.into_iter().enumerate() {
            let (row, col) = (10 + i / 10, i % 10);
            if filled && col != row % 10 {
                board.set(row, col, Some(PieceKind::Z));
            }
        }
        board
    })
}

fn assert_no_full_rows(board: &Board) {
    for row in 0..board.height() as usize {
        assert!(!board.is_row_full(row), "row {row} left full");
    }
}

proptest! {
    #[test]
    fn collides_outside_walls_and_floor(
        kind in kind_strategy(),
        turns in 0usize..4,
        x in -6i8..14,
        y in -6i8..24,
    ) {
        let board = Board::new(10, 20);
        let mut piece = Piece::new(kind);
        for _ in 0..turns {
            piece = piece.rotated();
        }
        let out_of_bounds = piece.shape.cells().any(|(cx, cy)| {
            let (px, py) = (x + cx, y + cy);
            px < 0 || px >= 10 || py >= 20
        });
        prop_assert_eq!(collides(&board, Position { x, y }, &piece.shape, 0, 0), out_of_bounds);
    }

    #[test]
    fn hard_drop_matches_repeated_moves(
        seed in any::<u64>(),
        board in rubble_strategy(),
        kind in kind_strategy(),
        turns in 0usize..4,
        x in 0i8..7,
    ) {
        let mut piece = Piece::new(kind);
        for _ in 0..turns {
            piece = piece.rotated();
        }

        let mut stepped = GameState::new(seed);
        *stepped.board_mut() = board.clone();
        let start = Position { x, y: 0 };
        let placed = stepped.place_active(piece.clone(), start);
        prop_assume!(placed);
        while stepped.try_move(0, 1) {}
        let expected = stepped.active().map(|a| a.position);

        let mut dropped = GameState::new(seed);
        *dropped.board_mut() = board;
        let placed = dropped.place_active(piece, start);
        prop_assert!(placed);
        prop_assert_eq!(dropped.ghost_row(), expected.map(|p| p.y));
        prop_assert_eq!(dropped.ghost_row(), dropped.ghost_row());
        prop_assert_eq!(dropped.active().map(|a| a.position.y), Some(0));

        let outcome = dropped.hard_drop();
        prop_assert!(matches!(outcome, TickOutcome::Locked(_)));
    }

    #[test]
    fn random_play_keeps_invariants(
        seed in any::<u64>(),
        actions in prop::collection::vec(action_strategy(), 1..300),
    ) {
        let mut gs = GameState::new(seed);
        prop_assert!(gs.start_new_game());
        let mut last_score = 0;

        for action in actions {
            gs.apply_action(action);

            assert_no_full_rows(gs.board());
            prop_assert!(gs.score() >= last_score);
            prop_assert_eq!(gs.score() % LINE_CLEAR_BONUS, 0);
            last_score = gs.score();

            match gs.phase() {
                Phase::Falling => {
                    let active = gs.active().unwrap();
                    prop_assert!(!collides(gs.board(), active.position, &active.piece.shape, 0, 0));
                    prop_assert!(gs.running());
                }
                Phase::GameOver => {
                    prop_assert!(gs.active().is_none());
                    prop_assert!(!gs.running());
                }
                Phase::NoPiece => prop_assert!(false, "engine never idles after a spawn"),
            }
        }
    }
}
