//! TUI Rogue (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_rogue::{core,input,term,types}` and
//! adds the environment-driven [`config`].

pub mod config;

pub use tui_rogue_core as core;
pub use tui_rogue_input as input;
pub use tui_rogue_term as term;
pub use tui_rogue_types as types;
