//! GameView: maps a `core::World` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout (all positions fixed, the framebuffer clips what does not fit):
//! - HUD row above the window: time of day and player coordinates
//! - the world window at the view's anchor
//! - the status line at `STATUS_X, STATUS_Y`

use crate::core::{Canvas, EntityKind, Layer, World};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{STATUS_WIDTH, STATUS_X, STATUS_Y};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the status line goes and how wide it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusAnchor {
    pub x: u16,
    pub y: u16,
    pub width: u16,
}

impl Default for StatusAnchor {
    fn default() -> Self {
        Self {
            x: STATUS_X,
            y: STATUS_Y,
            width: STATUS_WIDTH,
        }
    }
}

/// Renders the world window, HUD and status line.
#[derive(Debug, Clone, Default)]
pub struct GameView {
    status: StatusAnchor,
}

impl GameView {
    pub fn new(status: StatusAnchor) -> Self {
        Self { status }
    }

    /// Render into an existing framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, world: &World, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        self.draw_hud(world, fb);
        world.render(&mut LayerCanvas { fb });
        self.draw_status(world.status().message(), fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, world: &World, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(world, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, world: &World, fb: &mut FrameBuffer) {
        let view = world.view();
        let Some(y) = view.y.checked_sub(2) else {
            return;
        };
        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle::fg(Rgb::new(160, 160, 170));

        let mode = if world.is_day() { "DAY" } else { "NIGHT" };
        fb.put_str(view.x, y, mode, label);
        let pos = world.player_position();
        fb.put_str(view.x + 7, y, &format!("@ {}", pos), value);
    }

    fn draw_status(&self, message: &str, fb: &mut FrameBuffer) {
        let style = CellStyle::default();
        fb.clear_span(self.status.x, self.status.y, self.status.width, style);
        fb.put_str(self.status.x, self.status.y, message, style);
    }
}

/// Adapts a framebuffer to the core's glyph sink, styling by layer.
struct LayerCanvas<'a> {
    fb: &'a mut FrameBuffer,
}

impl Canvas for LayerCanvas<'_> {
    fn put(&mut self, x: u16, y: u16, ch: char, layer: Layer) {
        self.fb.put_char(x, y, ch, layer_style(layer));
    }
}

pub fn layer_style(layer: Layer) -> CellStyle {
    match layer {
        Layer::Ground => CellStyle {
            dim: true,
            ..CellStyle::fg(Rgb::new(120, 110, 90))
        },
        Layer::Occupant(EntityKind::Obstacle) => CellStyle::fg(Rgb::new(140, 140, 150)),
        Layer::Occupant(EntityKind::Prop) => CellStyle {
            bold: true,
            ..CellStyle::fg(Rgb::new(230, 200, 90))
        },
        Layer::Occupant(EntityKind::Player | EntityKind::Ground) | Layer::Viewer => CellStyle {
            bold: true,
            ..CellStyle::fg(Rgb::new(255, 255, 255))
        },
        Layer::Fog => CellStyle {
            dim: true,
            ..CellStyle::fg(Rgb::new(60, 60, 80))
        },
        Layer::Void => CellStyle {
            dim: true,
            ..CellStyle::fg(Rgb::new(140, 60, 60))
        },
        Layer::Blank => CellStyle::default(),
    }
}
