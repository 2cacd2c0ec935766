//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains the grid world, entity occupancy, movement rules and the
//! visibility renderer. It has **no dependencies** on the terminal or input
//! handling, so it can run headless in tests and benchmarks.
//!
//! # Module Structure
//!
//! - [`geometry`]: integer Bresenham line and midpoint circle
//! - [`entity`]: entities, arena handles and on-enter reactions
//! - [`grid`]: tiles, occupancy and the entity arena
//! - [`placement`]: teleport, spawn search and the [`Player`]
//! - [`view`]: window paging and day/night rendering through a [`Canvas`]
//! - [`status`]: the transient status message channel
//! - [`noise`]: seeded fractal noise used to seed terrain
//! - [`world`]: the context object tying it all together
//!
//! # Rules
//!
//! - **Occupancy**: a tile has one permanent ground entity and at most one occupant.
//! - **Movement**: stepping onto an occupied tile never moves; it triggers the
//!   occupant instead.
//! - **Spawning**: a taken cell falls back to the first free cell on growing
//!   circles around it.
//! - **Soft failures**: out-of-bounds coordinates are ignored, never panics.
//!
//! # Example
//!
//! ```
//! use tui_rogue_core::{Entity, Grid, OnEnter, Player};
//! use tui_rogue_types::{Direction, Position};
//!
//! let mut grid = Grid::new(8, 8);
//! grid.spawn_new(
//!     Entity::boulder().with_on_enter(OnEnter::Message("bump".into())),
//!     Position::new(3, 2),
//! );
//! let player = Player::spawn(&mut grid, Position::new(2, 2));
//!
//! let mut messages: Vec<String> = Vec::new();
//! player.step(&mut grid, Direction::Right, &mut messages);
//!
//! assert_eq!(player.position(&grid), Position::new(2, 2));
//! assert_eq!(messages, vec!["bump".to_string()]);
//! ```

pub mod entity;
pub mod geometry;
pub mod grid;
pub mod noise;
pub mod placement;
pub mod status;
pub mod view;
pub mod world;

pub use tui_rogue_types as types;

// Re-export commonly used types for convenience
pub use entity::{Entity, EntityId, EntityKind, OnEnter};
pub use geometry::{bresenham_circle, bresenham_line};
pub use grid::{Grid, Tile, TileEdit};
pub use noise::{noise_map, NoiseParams, SimpleRng};
pub use placement::{MoveOutcome, Player};
pub use status::{Feedback, StatusLine};
pub use view::{trace_rays, visible_cells, Canvas, Layer, Sight, View};
pub use world::{seed_terrain, Redraw, World, WorldConfig};
