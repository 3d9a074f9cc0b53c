//! Input translation (engine-facing).
//!
//! Turns keyboard events and discrete hand gestures into the four engine
//! [`Command`](crate::types::Command)s. Nothing here touches game state; the
//! host forwards the commands to the engine.

pub mod gesture;
pub mod map;

pub use handblock_types as types;

pub use gesture::{Gesture, GestureTranslator, HandZone};
pub use map::{handle_key_event, should_quit, should_restart};
