//! RNG module - seedable piece and color selection
//!
//! Every piece draws its shape uniformly from the seven-shape catalog and its
//! color uniformly from the palette. Both draws come from a [`PieceSource`]
//! owned by the engine, so a seed fully determines a game.
//!
//! Also provides [`ScriptedPieces`] for tests and demos that need an exact
//! piece sequence.

use crate::types::{PieceColor, ShapeKind};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current generator state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Supplies the shape and color of each newly spawned piece
pub trait PieceSource {
    fn next_piece(&mut self) -> (ShapeKind, PieceColor);
}

/// Uniform random shapes and colors from a seeded [`SimpleRng`]
#[derive(Debug, Clone)]
pub struct RandomPieces {
    rng: SimpleRng,
}

impl RandomPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Get the current RNG state (for restarting with the same sequence)
    pub fn seed(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for RandomPieces {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for RandomPieces {
    fn next_piece(&mut self) -> (ShapeKind, PieceColor) {
        let kind = ShapeKind::ALL[self.rng.next_range(ShapeKind::ALL.len() as u32) as usize];
        let color =
            PieceColor::PALETTE[self.rng.next_range(PieceColor::PALETTE.len() as u32) as usize];
        (kind, color)
    }
}

/// Replays a fixed list of pieces, wrapping around at the end
#[derive(Debug, Clone)]
pub struct ScriptedPieces {
    pieces: Vec<(ShapeKind, PieceColor)>,
    index: usize,
}

impl ScriptedPieces {
    /// Panics if `pieces` is empty.
    pub fn new(pieces: Vec<(ShapeKind, PieceColor)>) -> Self {
        assert!(!pieces.is_empty(), "scripted piece list must not be empty");
        Self { pieces, index: 0 }
    }

    /// The same shape and color forever
    pub fn repeat(kind: ShapeKind, color: PieceColor) -> Self {
        Self::new(vec![(kind, color)])
    }
}

impl PieceSource for ScriptedPieces {
    fn next_piece(&mut self) -> (ShapeKind, PieceColor) {
        let piece = self.pieces[self.index];
        self.index = (self.index + 1) % self.pieces.len();
        piece
    }
}
