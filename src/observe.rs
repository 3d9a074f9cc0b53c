//! Headless observation: run a command script against a seeded engine and
//! report the final state as JSON.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{ActiveSnapshot, GameState, PieceSource, Snapshot};
use crate::types::{Command, PieceColor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveObservation {
    pub shape: &'static str,
    pub color: &'static str,
    pub x: i32,
    pub y: i32,
    /// Geometry rows, `1` for occupied
    pub geometry: Vec<Vec<u8>>,
}

impl From<&ActiveSnapshot> for ActiveObservation {
    fn from(active: &ActiveSnapshot) -> Self {
        Self {
            shape: active.kind.as_str(),
            color: active.color.as_str(),
            x: active.x,
            y: active.y,
            geometry: active
                .geometry
                .to_rows()
                .into_iter()
                .map(|row| row.into_iter().map(u8::from).collect())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    pub cols: u16,
    pub rows: u16,
    /// One string per row, top first: `.` empty, otherwise the color's initial
    pub board: Vec<String>,
    pub active: Option<ActiveObservation>,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
}

impl From<&Snapshot> for Observation {
    fn from(snap: &Snapshot) -> Self {
        let board = if snap.cols == 0 {
            Vec::new()
        } else {
            snap.cells
                .chunks(snap.cols as usize)
                .map(|row| row.iter().map(|c| cell_char(*c)).collect())
                .collect()
        };
        Self {
            cols: snap.cols,
            rows: snap.rows,
            board,
            active: snap.active.as_ref().map(ActiveObservation::from),
            score: snap.score,
            lines: snap.lines,
            pieces_locked: snap.pieces_locked,
            game_over: snap.game_over,
        }
    }
}

fn cell_char(cell: Option<PieceColor>) -> char {
    match cell {
        None => '.',
        Some(PieceColor::Cyan) => 'c',
        Some(PieceColor::Red) => 'r',
        Some(PieceColor::Green) => 'g',
        Some(PieceColor::Blue) => 'b',
        Some(PieceColor::Orange) => 'o',
        Some(PieceColor::Yellow) => 'y',
        Some(PieceColor::Purple) => 'p',
    }
}

/// Parse a command script, rejecting unknown names
pub fn parse_commands(names: &[String]) -> Result<Vec<Command>> {
    names
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| Command::from_str(s).ok_or_else(|| anyhow!("unknown command: {}", s)))
        .collect()
}

/// Apply `commands` in order; with `settle`, soft-drop until the current piece
/// locks (or the game ends)
pub fn run_script<S: PieceSource>(
    game: &mut GameState<S>,
    commands: &[Command],
    settle: bool,
) -> Observation {
    for &command in commands {
        game.apply(command);
    }
    if settle {
        while !game.game_over() && game.apply(Command::SoftDrop).lock.is_none() {}
    }
    Observation::from(&game.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, ScriptedPieces};
    use crate::types::ShapeKind;

    #[test]
    fn test_parse_commands() {
        let names = vec!["left".to_string(), " Rotate ".to_string(), "".to_string()];
        assert_eq!(
            parse_commands(&names).unwrap(),
            vec![Command::MoveLeft, Command::Rotate]
        );
        assert!(parse_commands(&["hold".to_string()]).is_err());
    }

    #[test]
    fn test_script_settles_piece_into_board() {
        let mut game = GameState::with_source(
            Board::new(4, 3).unwrap(),
            ScriptedPieces::repeat(ShapeKind::O, PieceColor::Yellow),
        );
        let obs = run_script(&mut game, &[Command::MoveRight, Command::MoveRight], true);

        assert_eq!(obs.board, vec!["....", "..yy", "..yy"]);
        assert_eq!(obs.pieces_locked, 1);
        assert_eq!(obs.active.as_ref().unwrap().shape, "o");
        assert_eq!(obs.active.unwrap().geometry, vec![vec![1, 1], vec![1, 1]]);
    }

    #[test]
    fn test_observation_serializes() {
        let game = GameState::new(10, 20, 3).unwrap();
        let obs = Observation::from(&game.snapshot());
        let json = serde_json::to_value(&obs).unwrap();
        assert_eq!(json["cols"], 10);
        assert_eq!(json["board"].as_array().unwrap().len(), 20);
        assert_eq!(json["game_over"], false);
        assert!(json["active"]["geometry"].is_array());
    }
}
