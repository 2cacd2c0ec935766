//! View module - what part of the world is drawn, and how
//!
//! The world is paged in window-sized blocks: the window's top-left world
//! coordinate is the focus position rounded down to a multiple of the window
//! size on each axis.
//!
//! Two render modes, picked by the grid's day flag:
//! - Day: the whole window, occupant glyph over ground glyph, `x` off the map.
//! - Night: fog everywhere, then rays from the viewer to every point of a
//!   circle whose radius is the window width. A ray stops at the first
//!   occupant it meets (which is still drawn). Rays overlap near the viewer
//!   and later rays overwrite earlier ones.
//!
//! Rendering writes through the [`Canvas`] trait so the core never touches
//! the terminal.

use std::collections::HashSet;

use crate::entity::{Entity, EntityKind};
use crate::geometry::{bresenham_circle, bresenham_line};
use crate::grid::Grid;
use crate::placement::Player;
use crate::types::{
    Position, BLANK_GLYPH, FOG_GLYPH, VIEW_HEIGHT, VIEW_WIDTH, VIEW_X, VIEW_Y, VOID_GLYPH,
};

/// What a drawn glyph represents, so a backend can style it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Ground,
    Occupant(EntityKind),
    Viewer,
    /// Night-mode cell no ray reached
    Fog,
    /// Outside the world
    Void,
    /// The viewer's own cell while rays are traced
    Blank,
}

/// Screen-space glyph sink
pub trait Canvas {
    fn put(&mut self, x: u16, y: u16, ch: char, layer: Layer);
}

/// What a ray saw at one cell
#[derive(Debug, Clone, Copy)]
pub enum Sight<'a> {
    Viewer,
    Ground(&'a Entity),
    Occupant(&'a Entity),
}

/// A rendering window anchored on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct View {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Default for View {
    fn default() -> Self {
        Self::new(VIEW_X, VIEW_Y, VIEW_WIDTH, VIEW_HEIGHT)
    }
}

impl View {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top-left world coordinate of the page containing `focus`
    pub fn window_origin(&self, focus: Position) -> Position {
        let page = |v: i32, size: u16| {
            if size == 0 {
                v
            } else {
                v - v.rem_euclid(size as i32)
            }
        };
        Position::new(page(focus.x, self.width), page(focus.y, self.height))
    }

    /// Screen cell of world cell `pos` for a window at `origin`, if inside it
    pub fn project(&self, origin: Position, pos: Position) -> Option<(u16, u16)> {
        let rx = pos.x - origin.x;
        let ry = pos.y - origin.y;
        if rx < 0 || ry < 0 || rx >= self.width as i32 || ry >= self.height as i32 {
            return None;
        }
        Some((self.x + rx as u16, self.y + ry as u16))
    }

    /// Render the window around `player` in the grid's current mode
    pub fn render(&self, grid: &Grid, player: &Player, canvas: &mut impl Canvas) {
        let focus = player.position(grid);
        if grid.is_day() {
            self.render_day(grid, focus, canvas);
        } else {
            self.render_night(grid, focus, player.symbol(grid), canvas);
        }
    }

    pub fn render_day(&self, grid: &Grid, focus: Position, canvas: &mut impl Canvas) {
        let origin = self.window_origin(focus);
        for ry in 0..self.height {
            for rx in 0..self.width {
                let world = origin.offset(rx as i32, ry as i32);
                let (ch, layer) = match grid.tile(world) {
                    Some(tile) => match tile.occupant().and_then(|id| grid.entity(id)) {
                        Some(occupant) => (occupant.symbol, Layer::Occupant(occupant.kind)),
                        None => (tile.ground().symbol, Layer::Ground),
                    },
                    None => (VOID_GLYPH, Layer::Void),
                };
                canvas.put(self.x + rx, self.y + ry, ch, layer);
            }
        }
    }

    pub fn render_night(
        &self,
        grid: &Grid,
        viewer: Position,
        viewer_symbol: char,
        canvas: &mut impl Canvas,
    ) {
        let origin = self.window_origin(viewer);

        for ry in 0..self.height {
            for rx in 0..self.width {
                canvas.put(self.x + rx, self.y + ry, FOG_GLYPH, Layer::Fog);
            }
        }

        trace_rays(
            grid,
            viewer,
            self.width as u32,
            |pos| self.project(origin, pos).is_some(),
            |pos, sight| {
                let Some((sx, sy)) = self.project(origin, pos) else {
                    return;
                };
                match sight {
                    Sight::Viewer => canvas.put(sx, sy, BLANK_GLYPH, Layer::Blank),
                    Sight::Ground(e) => canvas.put(sx, sy, e.symbol, Layer::Ground),
                    Sight::Occupant(e) => canvas.put(sx, sy, e.symbol, Layer::Occupant(e.kind)),
                }
            },
        );

        if let Some((sx, sy)) = self.project(origin, viewer) {
            canvas.put(sx, sy, viewer_symbol, Layer::Viewer);
        }
    }
}

/// Walk every ray from `viewer` to the radius-`radius` circle around it.
///
/// Cells outside the grid or rejected by `include` are skipped without ending
/// the ray. The viewer's own cell is reported as [`Sight::Viewer`]. An occupant
/// is reported and then ends its ray; ground never blocks. Cells are reported
/// once per ray that reaches them.
pub fn trace_rays<'g>(
    grid: &'g Grid,
    viewer: Position,
    radius: u32,
    include: impl Fn(Position) -> bool,
    mut visit: impl FnMut(Position, Sight<'g>),
) {
    for boundary in bresenham_circle(viewer, radius) {
        for cell in bresenham_line(viewer, boundary) {
            let Some(tile) = grid.tile(cell) else {
                continue;
            };
            if !include(cell) {
                continue;
            }
            if cell == viewer {
                visit(cell, Sight::Viewer);
                continue;
            }
            match tile.occupant().and_then(|id| grid.entity(id)) {
                Some(occupant) => {
                    visit(cell, Sight::Occupant(occupant));
                    break;
                }
                None => visit(cell, Sight::Ground(tile.ground())),
            }
        }
    }
}

/// Every in-grid cell some ray from `viewer` reaches, without a window limit
pub fn visible_cells(grid: &Grid, viewer: Position, radius: u32) -> HashSet<Position> {
    let mut seen = HashSet::new();
    trace_rays(grid, viewer, radius, |_| true, |pos, _| {
        seen.insert(pos);
    });
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_pages_in_blocks() {
        let view = View::new(10, 3, 60, 20);
        assert_eq!(view.window_origin(Position::new(15, 15)), Position::new(0, 0));
        assert_eq!(view.window_origin(Position::new(60, 19)), Position::new(60, 0));
        assert_eq!(view.window_origin(Position::new(119, 20)), Position::new(60, 20));
    }

    #[test]
    fn projection_rejects_outside_window() {
        let view = View::new(10, 3, 4, 2);
        let origin = Position::new(4, 2);
        assert_eq!(view.project(origin, Position::new(4, 2)), Some((10, 3)));
        assert_eq!(view.project(origin, Position::new(7, 3)), Some((13, 4)));
        assert_eq!(view.project(origin, Position::new(8, 3)), None);
        assert_eq!(view.project(origin, Position::new(3, 2)), None);
    }
}
