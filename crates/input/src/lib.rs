//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Movement is
//! one step per key press; there is no auto-repeat handling.

pub mod map;

pub use tui_rogue_types as types;

pub use map::{handle_key_event, should_quit};
