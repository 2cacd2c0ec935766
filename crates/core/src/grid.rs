//! Grid module - the world's tiles and the entities standing on them
//!
//! Tiles are stored in a flat row-major vector (`y * width + x`).
//! Each tile owns its ground entity outright; occupants are handles into the
//! grid's entity arena, so moving an entity never copies it.
//! Out-of-bounds access is never an error: lookups return `None` and
//! mutations report `false`.

use crate::entity::{Entity, EntityId};
use crate::types::{Position, GROUND_GLYPH};

/// One grid cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    ground: Entity,
    occupant: Option<EntityId>,
}

impl Tile {
    pub fn ground(&self) -> &Entity {
        &self.ground
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.occupant
    }

    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }
}

/// Fixed-size world grid plus the entity arena
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    tiles: Vec<Tile>,
    entities: Vec<Entity>,
    is_day: bool,
}

impl Grid {
    /// Create a grid covered in default ground, in day mode
    pub fn new(width: u16, height: u16) -> Self {
        let mut tiles = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                tiles.push(Tile {
                    ground: Entity::ground(Position::new(x, y), GROUND_GLYPH),
                    occupant: None,
                });
            }
        }
        Self {
            width,
            height,
            tiles,
            entities: Vec::new(),
            is_day: true,
        }
    }

    #[inline(always)]
    fn index(&self, pos: Position) -> Option<usize> {
        if pos.x < 0 || pos.x >= self.width as i32 || pos.y < 0 || pos.y >= self.height as i32 {
            return None;
        }
        Some((pos.y as usize) * (self.width as usize) + (pos.x as usize))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    /// Tile at `pos`, or `None` outside the grid
    pub fn tile(&self, pos: Position) -> Option<&Tile> {
        self.index(pos).map(|idx| &self.tiles[idx])
    }

    /// Mutable ground entity at `pos` (for repainting terrain)
    pub fn ground_mut(&mut self, pos: Position) -> Option<&mut Entity> {
        self.index(pos).map(|idx| &mut self.tiles[idx].ground)
    }

    /// All tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Add an entity to the arena without placing it
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.entities.len() as u32);
        self.entities.push(entity);
        id
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.0 as usize)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(id.0 as usize)
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Entity standing at `pos`, if any
    pub fn occupant(&self, pos: Position) -> Option<&Entity> {
        self.tile(pos)
            .and_then(|tile| tile.occupant)
            .and_then(|id| self.entity(id))
    }

    /// Whether `id` currently occupies the tile at its stored position
    pub fn is_placed(&self, id: EntityId) -> bool {
        self.entity(id)
            .and_then(|e| self.tile(e.position))
            .is_some_and(|tile| tile.occupant == Some(id))
    }

    /// Glyph a viewer sees at `pos`: the occupant's if present, else the ground's
    pub fn symbol_at(&self, pos: Position) -> Option<char> {
        let tile = self.tile(pos)?;
        Some(match tile.occupant.and_then(|id| self.entity(id)) {
            Some(occupant) => occupant.symbol,
            None => tile.ground.symbol,
        })
    }

    /// Set or clear the occupant of the tile at `pos`.
    ///
    /// A supplied entity has its stored position moved to `pos`. Returns false
    /// (and changes nothing) when `pos` is outside the grid or `id` is unknown.
    pub fn set_occupant(&mut self, pos: Position, occupant: Option<EntityId>) -> bool {
        let Some(idx) = self.index(pos) else {
            return false;
        };
        if let Some(id) = occupant {
            let Some(entity) = self.entities.get_mut(id.0 as usize) else {
                return false;
            };
            entity.position = pos;
            log::debug!("set position of {} : {}", entity.symbol, pos);
        }
        self.tiles[idx].occupant = occupant;
        true
    }

    /// Call `f` once per cell in row-major order with the matching mask value.
    ///
    /// Mask values are forwarded untouched. Cells the mask does not cover are
    /// skipped, as are mask entries outside the grid.
    pub fn map_with_mask<M: Copy>(&mut self, mask: &[Vec<M>], mut f: impl FnMut(&mut TileEdit<'_>, M)) {
        let (w, h) = (self.width as usize, self.height as usize);
        for (y, row) in mask.iter().enumerate().take(h) {
            for (x, &value) in row.iter().enumerate().take(w) {
                let mut edit = TileEdit {
                    grid: self,
                    position: Position::new(x as i32, y as i32),
                    index: y * w + x,
                };
                f(&mut edit, value);
            }
        }
    }

    pub fn is_day(&self) -> bool {
        self.is_day
    }

    pub fn set_day(&mut self, is_day: bool) {
        self.is_day = is_day;
    }

    /// Flip day/night, returning the new state
    pub fn toggle_day(&mut self) -> bool {
        self.is_day = !self.is_day;
        self.is_day
    }
}

/// Mutable view of one cell handed out by [`Grid::map_with_mask`]
pub struct TileEdit<'a> {
    grid: &'a mut Grid,
    position: Position,
    index: usize,
}

impl TileEdit<'_> {
    pub fn position(&self) -> Position {
        self.position
    }

    pub fn ground(&self) -> &Entity {
        &self.grid.tiles[self.index].ground
    }

    pub fn ground_mut(&mut self) -> &mut Entity {
        &mut self.grid.tiles[self.index].ground
    }

    pub fn occupant(&self) -> Option<EntityId> {
        self.grid.tiles[self.index].occupant
    }

    /// Put a new entity on this cell, replacing any current occupant
    pub fn place(&mut self, entity: Entity) -> EntityId {
        let id = self.grid.insert(entity);
        self.grid.set_occupant(self.position, Some(id));
        id
    }

    pub fn clear_occupant(&mut self) {
        self.grid.set_occupant(self.position, None);
    }
}
