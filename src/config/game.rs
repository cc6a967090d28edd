/// Game configuration constants.
///
/// This module defines the main gameplay parameters such as grid size,
/// the winning tile value, spawn odds, and the countdown duration.
pub const GRID_SIZE: usize = 4;

/// Tile value that ends the game with a win when produced by a merge.
pub const TARGET_TILE: u32 = 2048;

/// Probability that a freshly spawned tile is a 2 (otherwise a 4).
pub const TWO_TILE_CHANCE: f64 = 0.9;

/// Countdown duration in seconds. The clock starts on the first move.
pub const INITIAL_TIME: u64 = 45;
