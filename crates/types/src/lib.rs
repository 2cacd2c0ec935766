//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # World Dimensions
//!
//! - **Width**: 240 columns (indexed 0-239)
//! - **Height**: 200 rows (indexed 0-199)
//!
//! # Screen Layout
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `VIEW_X`, `VIEW_Y` | 10, 3 | Top-left screen cell of the world window |
//! | `VIEW_WIDTH` | 60 | Window width, also the night vision radius |
//! | `VIEW_HEIGHT` | 20 | Window height |
//! | `STATUS_X`, `STATUS_Y` | 10, 24 | Status line anchor |
//! | `STATUS_WIDTH` | 60 | Columns cleared before each status message |
//!
//! # Examples
//!
//! ```
//! use tui_rogue_types::{Direction, GameAction, Position};
//!
//! let p = Position::new(4, 7);
//! assert_eq!(p.step(Direction::Up), Position::new(4, 6));
//! assert_eq!(p.step(Direction::Right), Position::new(5, 7));
//!
//! let action = GameAction::Move(Direction::Left);
//! assert_ne!(action, GameAction::Refresh);
//! ```

use std::fmt;

/// World width in cells
pub const WORLD_WIDTH: u16 = 240;

/// World height in cells
pub const WORLD_HEIGHT: u16 = 200;

/// Screen column of the world window's left edge
pub const VIEW_X: u16 = 10;

/// Screen row of the world window's top edge
pub const VIEW_Y: u16 = 3;

/// Window width in cells (also the night-mode sampling radius)
pub const VIEW_WIDTH: u16 = 60;

/// Window height in cells
pub const VIEW_HEIGHT: u16 = 20;

/// Status line anchor
pub const STATUS_X: u16 = 10;
pub const STATUS_Y: u16 = 24;

/// Columns blanked before a new status message is written
pub const STATUS_WIDTH: u16 = 60;

/// Default terrain seed
pub const DEFAULT_SEED: u32 = 1;

/// Terrain noise sampling frequency across the whole world
pub const NOISE_FREQUENCY: f64 = 15.0;
pub const NOISE_OCTAVES: u32 = 6;
pub const NOISE_PERSISTENCE: f64 = 0.5;
pub const NOISE_LACUNARITY: f64 = 2.0;

/// Noise values at or above this become walls
pub const WALL_THRESHOLD: f32 = 0.2;

/// Glyphs
pub const GROUND_GLYPH: char = '_';
pub const OPEN_GROUND_GLYPH: char = ' ';
pub const WALL_GLYPH: char = '▓';
pub const BOULDER_GLYPH: char = 'o';
pub const PLAYER_GLYPH: char = '@';
pub const FOG_GLYPH: char = '░';
pub const VOID_GLYPH: char = 'x';
pub const BLANK_GLYPH: char = ' ';

/// Integer grid coordinate. Carries no bounds of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise offset
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Neighbouring cell one unit away in `direction`
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx, dy)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.x, self.y)
    }
}

/// Axis-aligned movement directions (screen orientation: y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit offset for this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// Game actions produced by the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Move(Direction),
    /// Force a full redraw
    Refresh,
    /// Flip between day and night rendering
    ToggleTime,
}
