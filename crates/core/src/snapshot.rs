use crate::pieces::{Geometry, Piece};
use crate::types::{Cell, PieceColor, ShapeKind};

/// Read-only copy of the falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub color: PieceColor,
    pub x: i32,
    pub y: i32,
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            geometry: value.geometry,
            color: value.color,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Occupied cells in board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.geometry
            .cells()
            .into_iter()
            .map(move |(c, r)| (self.x + c as i32, self.y + r as i32))
    }
}

/// Value copy of everything a renderer needs
///
/// Owns its cells, so holding one never aliases engine state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    pub cols: u16,
    pub rows: u16,
    /// Row-major cells, `rows * cols` long
    pub cells: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub game_over: bool,
}

impl Snapshot {
    /// Settled cell at (x, y), `None` when out of bounds
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return None;
        }
        self.cells
            .get(y as usize * self.cols as usize + x as usize)
            .copied()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && self.active.is_some()
    }
}
