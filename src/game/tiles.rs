//! Tile spawning.
//!
//! The engine's one random operation. Position choice and value draw both
//! come from the injected rng so a seeded game replays identically.

use rand::Rng;
use rand::seq::IteratorRandom;

use crate::config::game::TWO_TILE_CHANCE;
use crate::game::grid::{Grid, empty_positions};
use crate::game::types::{Cell, Position};

/// Place a new tile on a uniformly chosen empty slot: a 2 at
/// `TWO_TILE_CHANCE`, otherwise a 4. The tile takes the next id from
/// `next_id`. On a full grid this is a no-op and returns `None`.
pub fn spawn_tile<R: Rng>(grid: &mut Grid, next_id: &mut u64, rng: &mut R) -> Option<Position> {
    let pos = empty_positions(grid).into_iter().choose(rng)?;

    let value = if rng.random::<f64>() < TWO_TILE_CHANCE { 2 } else { 4 };
    *next_id += 1;
    grid[pos.y][pos.x] = Cell { value: Some(value), id: *next_id, merged_from: None };
    Some(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::generate_grid;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawn_fills_one_slot() {
        let mut grid = generate_grid(4);
        let mut next_id = 0;
        let mut rng = Pcg32::seed_from_u64(7);

        let pos = spawn_tile(&mut grid, &mut next_id, &mut rng).expect("grid has room");
        let cell = grid[pos.y][pos.x];
        assert!(matches!(cell.value, Some(2) | Some(4)));
        assert_eq!(cell.id, 1);
        assert_eq!(next_id, 1);
        assert_eq!(empty_positions(&grid).len(), 15);
    }

    #[test]
    fn test_spawn_on_full_grid_is_noop() {
        let mut grid = generate_grid(2);
        for (i, cell) in grid.iter_mut().flatten().enumerate() {
            *cell = Cell { value: Some(2), id: i as u64 + 1, merged_from: None };
        }
        let before = grid.clone();
        let mut next_id = 4;
        let mut rng = Pcg32::seed_from_u64(0);

        assert_eq!(spawn_tile(&mut grid, &mut next_id, &mut rng), None);
        assert_eq!(grid, before);
        assert_eq!(next_id, 4);
    }

    #[test]
    fn test_spawn_targets_last_empty_slot() {
        let mut grid = generate_grid(2);
        let mut id = 0;
        for (y, x) in [(0, 0), (0, 1), (1, 0)] {
            id += 1;
            grid[y][x] = Cell { value: Some(8), id, merged_from: None };
        }
        let mut next_id = id;
        let mut rng = Pcg32::seed_from_u64(99);

        let pos = spawn_tile(&mut grid, &mut next_id, &mut rng);
        assert_eq!(pos, Some(Position { x: 1, y: 1 }));
        assert_eq!(next_id, 4);
        // Pre-existing tiles are untouched.
        assert_eq!(grid[0][0].value, Some(8));
        assert_eq!(grid[0][1].value, Some(8));
        assert_eq!(grid[1][0].value, Some(8));
    }

    #[test]
    fn test_spawn_is_deterministic_for_a_seed() {
        let run = |seed: u64| {
            let mut grid = generate_grid(4);
            let mut next_id = 0;
            let mut rng = Pcg32::seed_from_u64(seed);
            for _ in 0..8 {
                spawn_tile(&mut grid, &mut next_id, &mut rng);
            }
            grid
        };
        assert_eq!(run(42), run(42));
    }
}
