//! Pieces module - tetromino geometry and clockwise rotation
//!
//! A piece's shape is a small boolean matrix (at most 4x4). Rotation is plain
//! matrix math with no kick tables: the engine either accepts the rotated
//! matrix in place or reverts it.

use arrayvec::ArrayVec;

use crate::rng::PieceSource;
use crate::types::{PieceColor, ShapeKind};

/// Largest matrix side any catalog shape reaches in any rotation
pub const MAX_GEOMETRY_SIDE: usize = 4;

/// Occupied `(col, row)` offsets of a geometry, relative to its top-left corner
pub type GeometryCells = ArrayVec<(u8, u8), { MAX_GEOMETRY_SIDE * MAX_GEOMETRY_SIDE }>;

/// Rectangular boolean matrix describing one rotation of a shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Geometry {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_GEOMETRY_SIDE]; MAX_GEOMETRY_SIDE],
}

impl Geometry {
    /// Build a geometry from row slices
    ///
    /// Panics if the matrix is empty, ragged, or larger than 4x4.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(!rows.is_empty() && rows.len() <= MAX_GEOMETRY_SIDE);
        let cols = rows[0].len();
        assert!(cols > 0 && cols <= MAX_GEOMETRY_SIDE);

        let mut bits = [[false; MAX_GEOMETRY_SIDE]; MAX_GEOMETRY_SIDE];
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.len(), cols, "ragged geometry row {}", r);
            for (c, &v) in row.iter().enumerate() {
                bits[r][c] = v != 0;
            }
        }

        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// Catalog geometry of a shape in spawn orientation
    pub fn of(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::I => Self::from_rows(&[&[1, 1, 1, 1]]),
            ShapeKind::O => Self::from_rows(&[&[1, 1], &[1, 1]]),
            ShapeKind::Z => Self::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            ShapeKind::S => Self::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
            ShapeKind::T => Self::from_rows(&[&[1, 1, 1], &[0, 1, 0]]),
            ShapeKind::L => Self::from_rows(&[&[1, 1, 1], &[1, 0, 0]]),
            ShapeKind::J => Self::from_rows(&[&[1, 1, 1], &[0, 0, 1]]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Whether sub-cell (row, col) is occupied; false outside the matrix
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.rows as usize && col < self.cols as usize && self.bits[row][col]
    }

    /// 90° clockwise rotation: an R x C matrix becomes C x R with
    /// `out[i][j] = self[R-1-j][i]`
    pub fn rotated_cw(&self) -> Self {
        let r = self.rows as usize;
        let c = self.cols as usize;
        let mut bits = [[false; MAX_GEOMETRY_SIDE]; MAX_GEOMETRY_SIDE];
        for (i, out_row) in bits.iter_mut().enumerate().take(c) {
            for (j, out) in out_row.iter_mut().enumerate().take(r) {
                *out = self.bits[r - 1 - j][i];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Occupied sub-cells as `(col, row)` offsets, row-major order
    pub fn cells(&self) -> GeometryCells {
        let mut out = GeometryCells::new();
        for r in 0..self.rows as usize {
            for c in 0..self.cols as usize {
                if self.bits[r][c] {
                    out.push((c as u8, r as u8));
                }
            }
        }
        out
    }

    /// Row-major copy of the matrix, one `Vec<bool>` per row
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        (0..self.rows as usize)
            .map(|r| self.bits[r][..self.cols as usize].to_vec())
            .collect()
    }
}

/// The falling piece: geometry, color and the board position of its top-left
/// corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub color: PieceColor,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    pub fn new(kind: ShapeKind, color: PieceColor, x: i32, y: i32) -> Self {
        Self {
            kind,
            geometry: Geometry::of(kind),
            color,
            x,
            y,
        }
    }

    /// Draw shape and color from `source` and place the piece at `(x, y)`
    pub fn random(source: &mut impl PieceSource, x: i32, y: i32) -> Self {
        let (kind, color) = source.next_piece();
        Self::new(kind, color, x, y)
    }

    /// Rotate the geometry 90° clockwise. Never consults the board.
    pub fn rotate(&mut self) {
        self.geometry = self.geometry.rotated_cw();
    }

    /// Occupied cells in board coordinates, shifted by `(dx, dy)`
    ///
    /// Saturates at the `i32` range, so huge offsets land off the board.
    pub fn cells_offset(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.geometry.cells().into_iter().map(move |(c, r)| {
            (
                self.x.saturating_add(c as i32).saturating_add(dx),
                self.y.saturating_add(r as i32).saturating_add(dy),
            )
        })
    }

    /// Occupied cells in board coordinates
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells_offset(0, 0)
    }
}
