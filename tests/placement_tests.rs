//! Placement tests - teleport collisions, spawn ring search, player movement

use tui_rogue::core::{bresenham_circle, Entity, Grid, MoveOutcome, OnEnter, Player};
use tui_rogue::types::{Direction, Position};

fn p(x: i32, y: i32) -> Position {
    Position::new(x, y)
}

fn fill_box(grid: &mut Grid, center: Position, half: i32, except: &[Position]) {
    for y in center.y - half..=center.y + half {
        for x in center.x - half..=center.x + half {
            if !except.contains(&p(x, y)) {
                grid.spawn_new(Entity::wall(), p(x, y));
            }
        }
    }
}

#[test]
fn test_teleport_onto_empty_tile() {
    let mut grid = Grid::new(10, 10);
    let (id, placed) = grid.spawn_new(Entity::boulder(), p(5, 4));
    assert_eq!(placed, Some(p(5, 4)));

    let mut messages: Vec<String> = Vec::new();
    let outcome = grid.teleport(id, p(5, 5), &mut messages);

    assert_eq!(outcome, MoveOutcome::Moved { from: p(5, 4), to: p(5, 5) });
    assert_eq!(grid.entity(id).unwrap().position, p(5, 5));
    assert!(grid.tile(p(5, 4)).unwrap().is_empty());
    assert_eq!(grid.tile(p(5, 5)).unwrap().occupant(), Some(id));
    assert!(messages.is_empty());
}

#[test]
fn test_teleport_onto_occupied_tile_fires_trigger_once() {
    let mut grid = Grid::new(10, 10);
    let (mover, _) = grid.spawn_new(Entity::player(), p(2, 2));
    let (boulder, _) = grid.spawn_new(
        Entity::boulder().with_on_enter(OnEnter::Message("You hit a boulder".into())),
        p(3, 2),
    );

    let mut messages: Vec<String> = Vec::new();
    let outcome = grid.teleport(mover, p(3, 2), &mut messages);

    assert_eq!(outcome, MoveOutcome::Blocked { by: boulder });
    assert_eq!(messages, vec!["You hit a boulder".to_string()]);
    assert_eq!(grid.entity(mover).unwrap().position, p(2, 2));
    assert_eq!(grid.tile(p(2, 2)).unwrap().occupant(), Some(mover));
    assert_eq!(grid.tile(p(3, 2)).unwrap().occupant(), Some(boulder));
}

#[test]
fn test_teleport_onto_self_triggers_self() {
    let mut grid = Grid::new(4, 4);
    let (id, _) = grid.spawn_new(
        Entity::boulder().with_on_enter(OnEnter::Message("self".into())),
        p(1, 1),
    );

    let mut messages: Vec<String> = Vec::new();
    assert_eq!(
        grid.teleport(id, p(1, 1), &mut messages),
        MoveOutcome::Blocked { by: id }
    );
    assert_eq!(messages, vec!["self".to_string()]);
    assert_eq!(grid.tile(p(1, 1)).unwrap().occupant(), Some(id));
}

#[test]
fn test_teleport_out_of_bounds_is_noop() {
    let mut grid = Grid::new(4, 4);
    let (id, _) = grid.spawn_new(Entity::boulder(), p(0, 0));

    let mut messages: Vec<String> = Vec::new();
    assert_eq!(grid.teleport(id, p(-1, 0), &mut messages), MoveOutcome::OutOfBounds);
    assert_eq!(grid.teleport(id, p(0, 4), &mut messages), MoveOutcome::OutOfBounds);
    assert_eq!(grid.entity(id).unwrap().position, p(0, 0));
    assert_eq!(grid.tile(p(0, 0)).unwrap().occupant(), Some(id));
}

#[test]
fn test_spawn_on_free_cell_places_directly() {
    let mut grid = Grid::new(5, 5);
    let id = grid.insert(Entity::boulder());
    assert_eq!(grid.spawn(id, p(2, 3)), Some(p(2, 3)));
    assert_eq!(grid.tile(p(2, 3)).unwrap().occupant(), Some(id));
}

#[test]
fn test_spawn_takes_first_free_ring_two_cell_in_generation_order() {
    let c = p(10, 10);
    // Two free cells on the radius-2 ring: (+1,+2) comes before (-2,+1).
    let late = c.offset(-2, 1);
    let early = c.offset(1, 2);

    let mut grid = Grid::new(21, 21);
    fill_box(&mut grid, c, 3, &[late, early]);

    let id = grid.insert(Entity::boulder());
    assert_eq!(grid.spawn(id, c), Some(early));
    assert_eq!(grid.tile(early).unwrap().occupant(), Some(id));

    let id2 = grid.insert(Entity::boulder());
    assert_eq!(grid.spawn(id2, c), Some(late));
}

#[test]
fn test_spawn_never_lands_on_radius_one_or_three() {
    let c = p(10, 10);
    let ring2 = bresenham_circle(c, 2);
    let target = ring2[14];
    assert_eq!(target, c.offset(-2, 1));

    // Everything within Chebyshev distance 4 is taken except one ring-2 cell
    // and every ring-3 cell.
    let mut except: Vec<Position> = bresenham_circle(c, 3);
    except.push(target);
    let mut grid = Grid::new(21, 21);
    fill_box(&mut grid, c, 4, &except);

    let id = grid.insert(Entity::boulder());
    assert_eq!(grid.spawn(id, c), Some(target));
}

#[test]
fn test_spawn_skips_out_of_bounds_ring_points() {
    let mut grid = Grid::new(3, 3);
    grid.spawn_new(Entity::wall(), p(0, 0));
    grid.spawn_new(Entity::wall(), p(1, 0));
    grid.spawn_new(Entity::wall(), p(0, 1));

    let id = grid.insert(Entity::boulder());
    // Ring 1 around the corner: only (1,1) is both in-bounds and free.
    assert_eq!(grid.spawn(id, p(0, 0)), Some(p(1, 1)));
}

#[test]
fn test_spawn_outside_grid_searches_around_it() {
    let mut grid = Grid::new(4, 4);
    let id = grid.insert(Entity::boulder());

    // Radius 1 around (-1, 0): the first four points are off the grid, the
    // fifth is (0, 0).
    assert_eq!(grid.spawn(id, p(-1, 0)), Some(p(0, 0)));
    assert!(grid.is_placed(id));
    assert_eq!(grid.entity(id).unwrap().position, p(0, 0));
}

#[test]
fn test_spawn_exhaustion_leaves_entity_unplaced() {
    let mut grid = Grid::new(3, 3);
    for y in 0..3 {
        for x in 0..3 {
            grid.spawn_new(Entity::wall(), p(x, y));
        }
    }
    let id = grid.insert(Entity::boulder());
    assert_eq!(grid.spawn(id, p(1, 1)), None);
    assert!(!grid.is_placed(id));
    assert!(grid.tiles().all(|t| t.occupant() != Some(id)));
}

#[test]
fn test_player_moves_in_four_directions() {
    let mut grid = Grid::new(10, 10);
    let player = Player::spawn(&mut grid, p(5, 5));
    let mut messages: Vec<String> = Vec::new();

    let expected = [
        (Direction::Up, p(5, 4)),
        (Direction::Right, p(6, 4)),
        (Direction::Down, p(6, 5)),
        (Direction::Left, p(5, 5)),
    ];
    for (dir, pos) in expected {
        assert!(player.step(&mut grid, dir, &mut messages).moved());
        assert_eq!(player.position(&grid), pos);
    }
    assert_eq!(grid.tiles().filter(|t| !t.is_empty()).count(), 1);
}

#[test]
fn test_player_stops_at_world_edge() {
    let mut grid = Grid::new(3, 3);
    let player = Player::spawn(&mut grid, p(0, 0));
    let mut messages: Vec<String> = Vec::new();

    assert_eq!(
        player.step(&mut grid, Direction::Left, &mut messages),
        MoveOutcome::OutOfBounds
    );
    assert_eq!(player.position(&grid), p(0, 0));
}

#[test]
fn test_player_spawn_is_displaced_by_boulder() {
    let mut grid = Grid::new(30, 30);
    grid.spawn_new(Entity::boulder(), p(15, 15));
    let player = Player::spawn(&mut grid, p(15, 15));
    // First radius-1 point in generation order is (+0, +1).
    assert_eq!(player.position(&grid), p(15, 16));
}
