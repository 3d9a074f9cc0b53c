//! Board engine scenarios driven through the public command surface

use handblock::core::{Board, CommandOutcome, GameState, LockEvent, ScriptedPieces};
use handblock::types::{Command, PieceColor, ShapeKind};

fn only(kind: ShapeKind, color: PieceColor) -> ScriptedPieces {
    ScriptedPieces::repeat(kind, color)
}

#[test]
fn test_full_rows_two_and_five_clear_and_shift() {
    // Rows 2 and 5 are full except column 3; a vertical I dropped into
    // column 3 lands on (3, 6) and completes both.
    let mut board = Board::new(10, 20).unwrap();
    board.fill_row(2, PieceColor::Purple);
    board.fill_row(5, PieceColor::Purple);
    board.set(3, 2, None);
    board.set(3, 5, None);
    board.set(0, 1, Some(PieceColor::Red));
    board.set(0, 3, Some(PieceColor::Green));
    board.set(0, 4, Some(PieceColor::Blue));
    board.set(3, 6, Some(PieceColor::Orange));

    let mut game = GameState::with_source(board, only(ShapeKind::I, PieceColor::Cyan));
    assert!(game.apply(Command::Rotate).applied);
    assert!(game.apply(Command::SoftDrop).applied);
    assert!(game.apply(Command::SoftDrop).applied);

    let outcome = game.apply(Command::SoftDrop);
    assert_eq!(
        outcome,
        CommandOutcome {
            applied: false,
            lock: Some(LockEvent {
                lines_cleared: 2,
                score_gained: 200,
                game_over: false,
            }),
            game_over: false,
        }
    );
    assert_eq!(game.score(), 200);
    assert_eq!(game.lines(), 2);

    let board = game.board();
    // Row 1 moved down past both cleared rows, rows 3 and 4 past one.
    assert_eq!(board.get(0, 3), Some(Some(PieceColor::Red)));
    assert_eq!(board.get(0, 4), Some(Some(PieceColor::Green)));
    assert_eq!(board.get(3, 4), Some(Some(PieceColor::Cyan)));
    assert_eq!(board.get(0, 5), Some(Some(PieceColor::Blue)));
    assert_eq!(board.get(3, 5), Some(Some(PieceColor::Cyan)));
    // Rows below the lowest cleared row are untouched.
    assert_eq!(board.get(3, 6), Some(Some(PieceColor::Orange)));
    for y in 0..3 {
        assert!(board.row(y).unwrap().iter().all(Option::is_none));
    }
    assert_eq!(board.occupied_count(), 6);
}

#[test]
fn test_only_blocked_downward_move_locks() {
    let mut game = GameState::with_source(
        Board::new(10, 20).unwrap(),
        only(ShapeKind::O, PieceColor::Yellow),
    );

    for _ in 0..3 {
        assert!(game.apply(Command::MoveLeft).applied);
    }
    let blocked = game.apply(Command::MoveLeft);
    assert!(!blocked.applied);
    assert_eq!(blocked.lock, None);
    assert_eq!(game.pieces_locked(), 0);
    assert!(!game.apply(Command::MoveLeft).applied);
    assert_eq!(game.pieces_locked(), 0);

    for _ in 0..18 {
        assert!(game.apply(Command::SoftDrop).applied);
    }
    assert_eq!(game.pieces_locked(), 0);

    let locked = game.apply(Command::SoftDrop);
    assert!(!locked.applied);
    assert!(locked.lock.is_some());
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(game.board().get(0, 19), Some(Some(PieceColor::Yellow)));
    assert_eq!(game.board().get(1, 18), Some(Some(PieceColor::Yellow)));

    // The replacement piece starts fresh at the spawn anchor.
    let active = game.active().unwrap();
    assert_eq!((active.x, active.y), game.spawn_anchor());
}

#[test]
fn test_narrow_board_single_line_scenario() {
    let mut game = GameState::with_source(
        Board::new(4, 10).unwrap(),
        only(ShapeKind::I, PieceColor::Cyan),
    );
    assert_eq!(game.spawn_anchor(), (0, 0));

    for _ in 0..9 {
        assert!(game.apply(Command::SoftDrop).applied);
    }
    let outcome = game.apply(Command::SoftDrop);
    assert_eq!(outcome.lock.map(|e| e.lines_cleared), Some(1));

    assert_eq!(game.score(), 100);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.pieces_locked(), 1);
    assert_eq!(game.board().occupied_count(), 0);
    assert!(!game.game_over());
    let active = game.active().unwrap();
    assert_eq!((active.x, active.y), (0, 0));
}

#[test]
fn test_rotation_against_wall_keeps_geometry() {
    let mut game = GameState::with_source(
        Board::new(10, 20).unwrap(),
        only(ShapeKind::I, PieceColor::Cyan),
    );
    assert!(game.apply(Command::Rotate).applied);
    for _ in 0..6 {
        assert!(game.apply(Command::MoveRight).applied);
    }
    let before = game.active().unwrap();
    assert_eq!((before.x, before.geometry.rows(), before.geometry.cols()), (9, 4, 1));

    // Horizontal again would need columns 9..=12.
    let outcome = game.apply(Command::Rotate);
    assert!(!outcome.applied);
    assert_eq!(game.active().unwrap(), before);
}

#[test]
fn test_stacking_to_the_top_ends_the_game() {
    let mut game = GameState::with_source(
        Board::new(10, 20).unwrap(),
        only(ShapeKind::O, PieceColor::Yellow),
    );

    let mut steps = 0;
    while !game.game_over() {
        game.apply(Command::SoftDrop);
        steps += 1;
        assert!(steps < 1_000, "game never ended");
    }

    // Ten O pieces fill columns 3 and 4 from row 19 up to row 0.
    assert_eq!(game.pieces_locked(), 10);
    assert!(game.active().is_none());
    assert_eq!(game.score(), 0);

    let before = game.snapshot();
    for command in [
        Command::MoveLeft,
        Command::MoveRight,
        Command::SoftDrop,
        Command::Rotate,
    ] {
        let outcome = game.apply(command);
        assert!(!outcome.applied);
        assert!(outcome.game_over);
        assert_eq!(outcome.lock, None);
    }
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_blocked_spawn_on_construction() {
    let mut board = Board::new(10, 20).unwrap();
    board.set(4, 0, Some(PieceColor::Red));
    let game = GameState::with_source(board, only(ShapeKind::T, PieceColor::Purple));

    assert!(game.game_over());
    assert!(game.active().is_none());
    assert!(game.check_collision(0, 0));
    assert!(!game.snapshot().playable());
}
