//! Entity module - anything with a position and a glyph
//!
//! Ground entities are owned by their tile. Everything else (player, boulders,
//! walls) lives in the grid's entity arena and is addressed by [`EntityId`].

use crate::status::Feedback;
use crate::types::{Position, BOULDER_GLYPH, PLAYER_GLYPH, WALL_GLYPH};

/// Stable handle into the grid's entity arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// What an entity is, for trigger dispatch and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// Permanent floor of a tile
    Ground,
    Player,
    /// Movable scenery such as boulders
    Prop,
    /// Terrain walls
    Obstacle,
}

/// Reaction when something tries to step onto the entity's cell
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OnEnter {
    #[default]
    Nothing,
    /// Post a status message
    Message(String),
}

impl OnEnter {
    pub fn fire(&self, feedback: &mut dyn Feedback) {
        match self {
            OnEnter::Nothing => {}
            OnEnter::Message(text) => feedback.post(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub position: Position,
    pub symbol: char,
    pub kind: EntityKind,
    /// Reserved for blocking rules; movement does not consult it
    pub solid: bool,
    pub destructible: bool,
    pub hp: i32,
    pub on_enter: OnEnter,
}

impl Entity {
    pub fn new(kind: EntityKind, symbol: char) -> Self {
        Self {
            position: Position::default(),
            symbol,
            kind,
            solid: false,
            destructible: true,
            hp: 1,
            on_enter: OnEnter::Nothing,
        }
    }

    pub fn ground(position: Position, symbol: char) -> Self {
        Self {
            position,
            ..Self::new(EntityKind::Ground, symbol)
        }
    }

    pub fn player() -> Self {
        Self::new(EntityKind::Player, PLAYER_GLYPH)
    }

    pub fn boulder() -> Self {
        Self::new(EntityKind::Prop, BOULDER_GLYPH)
    }

    pub fn wall() -> Self {
        Self {
            solid: true,
            destructible: false,
            ..Self::new(EntityKind::Obstacle, WALL_GLYPH)
        }
    }

    pub fn with_on_enter(mut self, on_enter: OnEnter) -> Self {
        self.on_enter = on_enter;
        self
    }

    /// Run the on-enter reaction. Ground never reacts.
    pub fn entered(&self, feedback: &mut dyn Feedback) {
        match self.kind {
            EntityKind::Ground => {}
            EntityKind::Player | EntityKind::Prop | EntityKind::Obstacle => {
                log::trace!("on-enter {:?} at {}", self.kind, self.position);
                self.on_enter.fire(feedback);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_plain_objects() {
        let e = Entity::boulder();
        assert!(!e.solid);
        assert!(e.destructible);
        assert_eq!(e.hp, 1);
        assert_eq!(e.on_enter, OnEnter::Nothing);
    }

    #[test]
    fn message_trigger_posts_once() {
        let e = Entity::boulder().with_on_enter(OnEnter::Message("You hit a boulder".into()));
        let mut log: Vec<String> = Vec::new();
        e.entered(&mut log);
        assert_eq!(log, vec!["You hit a boulder".to_string()]);
    }

    #[test]
    fn ground_ignores_triggers() {
        let g = Entity::ground(Position::new(1, 1), '_')
            .with_on_enter(OnEnter::Message("never".into()));
        let mut log: Vec<String> = Vec::new();
        g.entered(&mut log);
        assert!(log.is_empty());
    }
}
