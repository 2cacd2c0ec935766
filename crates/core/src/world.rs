//! World module - the explicit game context
//!
//! Owns the grid, the player handle, the view window and the status line.
//! Built once at startup and passed by reference to whatever needs it.

use crate::entity::{Entity, OnEnter};
use crate::grid::Grid;
use crate::noise::{noise_map, NoiseParams};
use crate::placement::{MoveOutcome, Player};
use crate::status::{Feedback, StatusLine};
use crate::types::{GameAction, Position, OPEN_GROUND_GLYPH, WALL_THRESHOLD, WORLD_HEIGHT, WORLD_WIDTH};
use crate::view::{Canvas, View};

/// Where the first boulder goes; bumping it posts a message
pub const BOULDER_SPAWN: Position = Position::new(10, 10);
/// Where the second (silent) boulder goes
pub const SECOND_BOULDER_SPAWN: Position = Position::new(15, 15);
/// Requested player start; usually displaced by the second boulder
pub const PLAYER_SPAWN: Position = Position::new(15, 15);

pub const BOULDER_MESSAGE: &str = "You hit a boulder";
pub const GAME_BEGUN_MESSAGE: &str = "Game begun";
pub const REFRESHED_MESSAGE: &str = "Screen refreshed";
pub const TIME_CHANGED_MESSAGE: &str = "Time is changed";

/// Everything needed to build a world
#[derive(Debug, Clone, PartialEq)]
pub struct WorldConfig {
    pub width: u16,
    pub height: u16,
    pub noise: NoiseParams,
    /// Noise values at or above this become walls
    pub wall_threshold: f32,
    pub start_day: bool,
    pub player_start: Position,
    pub view: View,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            noise: NoiseParams::default(),
            wall_threshold: WALL_THRESHOLD,
            start_day: true,
            player_start: PLAYER_SPAWN,
            view: View::default(),
        }
    }
}

/// How much of the screen must be redrawn after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redraw {
    /// Only changed cells
    Diff,
    /// Clear and repaint everything
    Full,
}

#[derive(Debug, Clone)]
pub struct World {
    grid: Grid,
    player: Player,
    view: View,
    status: StatusLine,
}

impl World {
    /// Build the terrain, props and player from `config`
    pub fn generate(config: &WorldConfig) -> Self {
        let mut grid = Grid::new(config.width, config.height);

        let mask = noise_map(config.width, config.height, &config.noise);
        let walls = seed_terrain(&mut grid, &mask, config.wall_threshold);

        grid.spawn_new(
            Entity::boulder().with_on_enter(OnEnter::Message(BOULDER_MESSAGE.to_string())),
            BOULDER_SPAWN,
        );
        grid.spawn_new(Entity::boulder(), SECOND_BOULDER_SPAWN);

        let player = Player::spawn(&mut grid, config.player_start);
        grid.set_day(config.start_day);

        log::info!(
            "generated {}x{} world (seed {}, {} walls), player at {}",
            config.width,
            config.height,
            config.noise.seed,
            walls,
            player.position(&grid)
        );

        Self::from_parts(grid, player, config.view)
    }

    /// Assemble a world from an already populated grid
    pub fn from_parts(grid: Grid, player: Player, view: View) -> Self {
        Self {
            grid,
            player,
            view,
            status: StatusLine::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn player_position(&self) -> Position {
        self.player.position(&self.grid)
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn status(&self) -> &StatusLine {
        &self.status
    }

    pub fn post(&mut self, message: &str) {
        self.status.post(message);
    }

    pub fn is_day(&self) -> bool {
        self.grid.is_day()
    }

    /// Apply one input action
    pub fn apply_action(&mut self, action: GameAction) -> Redraw {
        match action {
            GameAction::Move(direction) => {
                let outcome = self.player.step(&mut self.grid, direction, &mut self.status);
                if let MoveOutcome::Blocked { by } = outcome {
                    log::debug!("player blocked by {:?} moving {:?}", by, direction);
                }
                Redraw::Diff
            }
            GameAction::Refresh => {
                self.status.post(REFRESHED_MESSAGE);
                Redraw::Full
            }
            GameAction::ToggleTime => {
                let day = self.grid.toggle_day();
                log::info!("switched to {}", if day { "day" } else { "night" });
                self.status.post(TIME_CHANGED_MESSAGE);
                Redraw::Full
            }
        }
    }

    /// Draw the view window for the current mode
    pub fn render(&self, canvas: &mut impl Canvas) {
        self.view.render(&self.grid, &self.player, canvas);
    }
}

/// Paint terrain from a noise mask: high values become walls, the rest open ground.
///
/// Returns the number of walls placed.
pub fn seed_terrain(grid: &mut Grid, mask: &[Vec<f32>], threshold: f32) -> usize {
    let mut walls = 0;
    grid.map_with_mask(mask, |tile, value| {
        if value >= threshold {
            tile.place(Entity::wall());
            walls += 1;
        } else {
            tile.ground_mut().symbol = OPEN_GROUND_GLYPH;
        }
    });
    walls
}
