//! HandBlock (workspace facade crate).
//!
//! Re-exports the engine, input, terminal and shared-type crates under
//! `handblock::{core,input,term,types}` and hosts the pieces only the binary
//! needs: configuration, the gravity driver and headless observation.

pub use handblock_core as core;
pub use handblock_input as input;
pub use handblock_term as term;
pub use handblock_types as types;

pub mod config;
pub mod gravity;
pub mod observe;
