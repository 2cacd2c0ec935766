//! Terminal roguelike runner (default binary).
//!
//! Blocking loop: draw, wait for a key, apply it, repeat. Rendering goes
//! through a reused framebuffer that is diffed against the previous frame.

use std::fs::File;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_rogue::config::GameConfig;
use tui_rogue::core::world::GAME_BEGUN_MESSAGE;
use tui_rogue::core::{Redraw, World};
use tui_rogue::input::{handle_key_event, should_quit};
use tui_rogue::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut world = World::generate(&config.world);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut world);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("game loop failed: {:#}", err);
    }
    result
}

/// The game owns the terminal, so logs only go to a file unless `RUST_LOG`
/// explicitly asks for stderr.
fn init_logging(config: &GameConfig) -> Result<()> {
    let mut builder = match &config.log_path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("opening log file {path}"))?;
            let mut builder =
                env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder
        }
        None => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")),
    };
    builder.try_init()?;
    Ok(())
}

fn run(term: &mut TerminalRenderer, world: &mut World) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    world.post(GAME_BEGUN_MESSAGE);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 25));
        view.render_into(world, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    log::info!("quit requested");
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    if world.apply_action(action) == Redraw::Full {
                        term.invalidate();
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
