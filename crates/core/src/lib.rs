//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the falling-block game. It has **no
//! dependencies** on UI, input devices, or I/O, which keeps it:
//!
//! - **Deterministic**: the same seed produces the same game
//! - **Testable**: every rule is reachable from plain function calls
//! - **Portable**: terminal, gesture, or headless hosts drive it the same way
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid with bounds-checked access and row clearing
//! - [`game_state`]: the engine: active piece, collisions, locking, score
//! - [`pieces`]: tetromino geometry matrices and clockwise rotation
//! - [`rng`]: seedable piece/color selection
//! - [`snapshot`]: read-only value copies for renderers
//!
//! # Game Rules
//!
//! - Shapes and colors are drawn uniformly and independently
//! - Rotation is clockwise and in place; a rotation that collides is rejected
//!   (no wall kicks)
//! - Only a blocked downward move locks the piece
//! - Each cleared row is worth 100 points
//! - The game ends when a freshly spawned piece collides
//!
//! # Example
//!
//! ```
//! use handblock_core::GameState;
//! use handblock_types::Command;
//!
//! let mut game = GameState::new(10, 20, 12345).unwrap();
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//!
//! // Gravity: keep moving down until the piece locks.
//! while game.apply(Command::SoftDrop).lock.is_none() {}
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Hosts issue [`Command::SoftDrop`](types::Command)
//! on their own fixed interval.

pub mod board;
pub mod error;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use handblock_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::CoreError;
pub use game_state::{CommandOutcome, GameState, LockEvent};
pub use pieces::{Geometry, Piece};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use snapshot::{ActiveSnapshot, Snapshot};
