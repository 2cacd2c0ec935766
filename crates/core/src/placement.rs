//! Placement and movement on top of [`Grid`] occupancy.
//!
//! - `teleport`: single collision-checked step. An occupied target does not move
//!   the entity; it fires the occupant's on-enter reaction instead.
//! - `spawn`: initial placement. A taken cell falls back to an expanding ring
//!   search using midpoint circles, scanned in generation order.
//!
//! All occupancy changes go through [`Grid::set_occupant`].

use crate::entity::{Entity, EntityId};
use crate::geometry::bresenham_circle;
use crate::grid::{Grid, Tile};
use crate::status::Feedback;
use crate::types::{Direction, Position};

/// Result of a [`Grid::teleport`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Target outside the grid; nothing happened
    OutOfBounds,
    /// The handle does not name an entity
    NoEntity,
    Moved { from: Position, to: Position },
    /// Target was occupied; its on-enter reaction fired
    Blocked { by: EntityId },
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }
}

impl Grid {
    /// Move `id` onto `target` if it is free, otherwise bump into its occupant.
    pub fn teleport(
        &mut self,
        id: EntityId,
        target: Position,
        feedback: &mut dyn Feedback,
    ) -> MoveOutcome {
        let Some(tile) = self.tile(target) else {
            return MoveOutcome::OutOfBounds;
        };

        if let Some(occupant) = tile.occupant() {
            if let Some(entity) = self.entity(occupant) {
                entity.entered(feedback);
            }
            return MoveOutcome::Blocked { by: occupant };
        }

        let Some(from) = self.entity(id).map(|e| e.position) else {
            return MoveOutcome::NoEntity;
        };
        self.relocate(id, target);
        log::debug!("moved {:?} from {} to {}", id, from, target);
        MoveOutcome::Moved { from, to: target }
    }

    /// Place `id` at `desired`, or at the nearest free ring cell around it.
    ///
    /// Returns where the entity ended up; `None` means no free cell was found
    /// within a radius below the grid width and the entity stays unplaced.
    pub fn spawn(&mut self, id: EntityId, desired: Position) -> Option<Position> {
        self.entity(id)?;

        let target = if self.tile(desired).is_some_and(Tile::is_empty) {
            Some(desired)
        } else {
            self.find_free_around(desired)
        };

        match target {
            Some(pos) => {
                self.relocate(id, pos);
                Some(pos)
            }
            None => {
                log::warn!("no free cell around {} for {:?}", desired, id);
                None
            }
        }
    }

    /// Insert `entity` into the arena and spawn it
    pub fn spawn_new(&mut self, entity: Entity, desired: Position) -> (EntityId, Option<Position>) {
        let id = self.insert(entity);
        let placed = self.spawn(id, desired);
        (id, placed)
    }

    /// First empty in-bounds cell on the circles of radius `1..width` around `center`
    pub fn find_free_around(&self, center: Position) -> Option<Position> {
        (1..self.width() as u32).find_map(|radius| {
            bresenham_circle(center, radius)
                .into_iter()
                .find(|&pos| self.tile(pos).is_some_and(Tile::is_empty))
        })
    }

    /// Occupy `to` and vacate the cell `id` was standing on (if it was placed)
    fn relocate(&mut self, id: EntityId, to: Position) {
        let previous = self
            .is_placed(id)
            .then(|| self.entity(id).map(|e| e.position))
            .flatten();

        self.set_occupant(to, Some(id));
        if let Some(prev) = previous.filter(|&prev| prev != to) {
            self.set_occupant(prev, None);
        }
    }
}

/// The controllable entity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Player {
    id: EntityId,
}

impl Player {
    /// Create the player entity and spawn it at (or near) `at`
    pub fn spawn(grid: &mut Grid, at: Position) -> Self {
        let (id, _) = grid.spawn_new(Entity::player(), at);
        Self { id }
    }

    pub fn from_id(id: EntityId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn position(&self, grid: &Grid) -> Position {
        grid.entity(self.id).map(|e| e.position).unwrap_or_default()
    }

    pub fn symbol(&self, grid: &Grid) -> char {
        grid.entity(self.id).map(|e| e.symbol).unwrap_or(crate::types::PLAYER_GLYPH)
    }

    /// One unit step in `direction`
    pub fn step(
        &self,
        grid: &mut Grid,
        direction: Direction,
        feedback: &mut dyn Feedback,
    ) -> MoveOutcome {
        let target = self.position(grid).step(direction);
        grid.teleport(self.id, target, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relocate_leaves_foreign_occupant_alone() {
        let mut grid = Grid::new(5, 5);
        // `a` was never placed, so its default position (0,0) belongs to `b`.
        let a = grid.insert(Entity::boulder());
        let (b, _) = grid.spawn_new(Entity::boulder(), Position::new(0, 0));

        let mut log: Vec<String> = Vec::new();
        let out = grid.teleport(a, Position::new(2, 2), &mut log);
        assert!(out.moved());
        assert_eq!(grid.tile(Position::new(0, 0)).unwrap().occupant(), Some(b));
        assert_eq!(grid.tile(Position::new(2, 2)).unwrap().occupant(), Some(a));
    }

    #[test]
    fn unknown_handle_does_nothing() {
        let mut grid = Grid::new(3, 3);
        let mut log: Vec<String> = Vec::new();
        assert_eq!(
            grid.teleport(EntityId(42), Position::new(1, 1), &mut log),
            MoveOutcome::NoEntity
        );
        assert_eq!(grid.spawn(EntityId(42), Position::new(1, 1)), None);
    }
}
