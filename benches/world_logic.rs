use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_rogue::core::{bresenham_circle, Canvas, Entity, Grid, Layer, Player, World, WorldConfig};
use tui_rogue::types::{Direction, Position};

struct NullCanvas(u64);

impl Canvas for NullCanvas {
    fn put(&mut self, x: u16, y: u16, ch: char, _layer: Layer) {
        self.0 = self.0.wrapping_add(x as u64 ^ y as u64 ^ ch as u64);
    }
}

fn bench_generate(c: &mut Criterion) {
    let config = WorldConfig::default();
    c.bench_function("generate_world", |b| {
        b.iter(|| World::generate(black_box(&config)))
    });
}

fn bench_night_render(c: &mut Criterion) {
    let mut world = World::generate(&WorldConfig::default());
    world.grid_mut().set_day(false);

    c.bench_function("render_night", |b| {
        b.iter(|| {
            let mut canvas = NullCanvas(0);
            world.render(&mut canvas);
            black_box(canvas.0)
        })
    });
}

fn bench_day_render(c: &mut Criterion) {
    let world = World::generate(&WorldConfig::default());

    c.bench_function("render_day", |b| {
        b.iter(|| {
            let mut canvas = NullCanvas(0);
            world.render(&mut canvas);
            black_box(canvas.0)
        })
    });
}

fn bench_spawn_search(c: &mut Criterion) {
    // Solid block with a single hole far from the requested cell.
    let mut grid = Grid::new(64, 64);
    for y in 0..64 {
        for x in 0..64 {
            if (x, y) != (60, 60) {
                grid.spawn_new(Entity::wall(), Position::new(x, y));
            }
        }
    }

    c.bench_function("find_free_around", |b| {
        b.iter(|| grid.find_free_around(black_box(Position::new(10, 10))))
    });
}

fn bench_circle(c: &mut Criterion) {
    c.bench_function("circle_r60", |b| {
        b.iter(|| bresenham_circle(black_box(Position::new(0, 0)), black_box(60)))
    });
}

fn bench_player_step(c: &mut Criterion) {
    let mut grid = Grid::new(64, 64);
    let player = Player::spawn(&mut grid, Position::new(32, 32));
    let mut messages: Vec<String> = Vec::new();

    c.bench_function("player_step", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let dir = if flip { Direction::Right } else { Direction::Left };
            player.step(&mut grid, dir, &mut messages)
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_night_render,
    bench_day_render,
    bench_spawn_search,
    bench_circle,
    bench_player_step
);
criterion_main!(benches);
