//! Property tests for the board engine.
//!
//! Invariants covered:
//! - The active piece never leaves the board.
//! - Commands that do not lock never touch settled cells.
//! - Every lock adds four cells and every cleared row removes a full row.
//! - Once the game is over, commands change nothing.

use handblock::core::GameState;
use handblock::types::Command;
use proptest::prelude::*;

const COMMANDS: [Command; 4] = [
    Command::MoveLeft,
    Command::MoveRight,
    Command::SoftDrop,
    Command::Rotate,
];

fn command_strategy() -> impl Strategy<Value = Command> {
    // Weight soft drops so runs reach locks and game over.
    prop_oneof![
        1 => Just(COMMANDS[0]),
        1 => Just(COMMANDS[1]),
        3 => Just(COMMANDS[2]),
        1 => Just(COMMANDS[3]),
    ]
}

fn assert_active_in_bounds(game: &GameState) {
    let cols = game.board().width() as i32;
    let rows = game.board().height() as i32;
    if let Some(piece) = game.active() {
        for (x, y) in piece.cells() {
            assert!((0..cols).contains(&x), "x={} outside 0..{}", x, cols);
            assert!((0..rows).contains(&y), "y={} outside 0..{}", y, rows);
            assert!(!game.board().is_occupied(x, y));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn engine_invariants_hold_over_random_play(
        seed in any::<u32>(),
        cols in 4u16..12,
        rows in 4u16..22,
        commands in prop::collection::vec(command_strategy(), 0..600),
    ) {
        let mut game = GameState::new(cols, rows, seed).unwrap();
        assert_active_in_bounds(&game);

        for command in commands {
            let before = game.snapshot();
            let outcome = game.apply(command);

            if before.game_over {
                prop_assert!(!outcome.applied);
                prop_assert_eq!(outcome.lock, None);
                prop_assert_eq!(game.snapshot(), before);
                continue;
            }

            match outcome.lock {
                None => {
                    prop_assert_eq!(game.board().cells(), &before.cells[..]);
                    prop_assert_eq!(game.pieces_locked(), before.pieces_locked);
                }
                Some(event) => {
                    prop_assert_eq!(command, Command::SoftDrop);
                    prop_assert!(!outcome.applied);
                    prop_assert_eq!(game.pieces_locked(), before.pieces_locked + 1);
                    prop_assert_eq!(event.score_gained, event.lines_cleared * 100);
                    prop_assert_eq!(event.game_over, game.game_over());
                }
            }

            prop_assert_eq!(game.score(), game.lines() * 100);
            prop_assert_eq!(
                game.board().occupied_count() as u32,
                game.pieces_locked() * 4 - game.lines() * cols as u32
            );
            prop_assert_eq!(game.active().is_none(), game.game_over());
            assert_active_in_bounds(&game);
        }
    }

    #[test]
    fn same_seed_same_game(
        seed in any::<u32>(),
        commands in prop::collection::vec(command_strategy(), 0..200),
    ) {
        let mut a = GameState::new(10, 20, seed).unwrap();
        let mut b = GameState::new(10, 20, seed).unwrap();
        for command in commands {
            prop_assert_eq!(a.apply(command), b.apply(command));
        }
        prop_assert_eq!(a.snapshot(), b.snapshot());
    }
}
