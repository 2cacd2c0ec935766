//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: the world is drawn into a plain
//! framebuffer of styled cells, which is then diffed and flushed to the
//! terminal through crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable (it only sees the `Canvas` trait)
//! - Only rewrite the cells that changed between frames
//! - Make "refresh" a real full repaint

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_rogue_core as core;
pub use tui_rogue_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{layer_style, GameView, StatusAnchor, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
