//! Terminal front end.
//!
//! Projects engine snapshots onto a framebuffer and flushes it to the
//! terminal with crossterm. No ratatui widgets/layout: the board is drawn
//! cell by cell so the aspect ratio (2 columns per cell) stays exact.
//!
//! - [`fb`]: styled character framebuffer
//! - [`game_view`]: snapshot → framebuffer (pure, testable)
//! - [`renderer`]: framebuffer → terminal, full or diffed

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use handblock_core as core;
pub use handblock_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
