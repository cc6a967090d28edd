use serde::{Serialize, Deserialize};

use crate::game::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }
}

/// One slot of the grid. An empty slot has no value, carries id 0 and no
/// merge marker. A non-empty slot holds a power-of-two value and a unique
/// id that follows the tile across moves; `merged_from` names the two tile
/// ids that fused into it during the move that created it, and is cleared
/// when the next move is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: Option<u32>,
    pub id: u64,
    pub merged_from: Option<(u64, u64)>,
}

impl Cell {
    pub fn empty() -> Self {
        Cell { value: None, id: 0, merged_from: None }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }
}

/// Where a game currently stands. Transitions are one-way within a run:
/// Idle -> Active -> Won or Lost. A restart replaces the state wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Idle,
    Active,
    Won,
    Lost,
}

/// Result of sliding the grid in one direction.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// True if any cell's value or merge marker changed position-for-position.
    pub moved: bool,
    /// Sum of the values created by merges during this move.
    pub score_delta: u32,
    /// True if a merge produced the target tile.
    pub reached_target: bool,
}
