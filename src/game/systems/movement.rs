//! Grid movement system.
//!
//! Slides every line toward the chosen wall, fusing equal neighbours once
//! per move. Pure over the input grid: the caller decides what to do with
//! the outcome (score it, spawn, check for a stalemate).

use crate::config::game::TARGET_TILE;
use crate::game::grid::{Grid, clear_merge_markers};
use crate::game::types::{Cell, Direction, MoveOutcome};

/// Resolve one move. Each line (row for Left/Right, column for Up/Down) is
/// compacted toward the wall, fused pairwise, and compacted again. A move
/// counts as `moved` when any slot's value or merge marker differs from the
/// pre-move grid; an ineffective move returns the input grid untouched and
/// spawns nothing downstream.
pub fn apply_move(grid: &Grid, direction: Direction, next_id: &mut u64) -> MoveOutcome {
    let size = grid.len();
    let mut next = grid.clone();
    clear_merge_markers(&mut next);

    let mut moved = false;
    let mut score_delta = 0;
    let mut reached_target = false;

    for index in 0..size {
        let positions = line_positions(size, direction, index);
        let line: Vec<Cell> = positions.iter().map(|&(y, x)| next[y][x]).collect();
        let resolved = resolve_line(&line, next_id, &mut score_delta, &mut reached_target);

        for (offset, &(y, x)) in positions.iter().enumerate() {
            if line[offset].value != resolved[offset].value
                || line[offset].merged_from != resolved[offset].merged_from
            {
                moved = true;
            }
            next[y][x] = resolved[offset];
        }
    }

    if !moved {
        // Wall already reached and no fusable pair: hand the grid back as-is.
        return MoveOutcome { grid: grid.clone(), moved: false, score_delta: 0, reached_target: false };
    }

    MoveOutcome { grid: next, moved, score_delta, reached_target }
}

/// Grid coordinates of one line, ordered from the wall the tiles slide
/// toward. Right and Down walk their lines in reverse so index 0 is always
/// the leading edge.
fn line_positions(size: usize, direction: Direction, index: usize) -> Vec<(usize, usize)> {
    (0..size)
        .map(|i| match direction {
            Direction::Left => (index, i),
            Direction::Right => (index, size - 1 - i),
            Direction::Up => (i, index),
            Direction::Down => (size - 1 - i, index),
        })
        .collect()
}

/// Compact, fuse neighbours once each, compact again.
fn resolve_line(
    line: &[Cell],
    next_id: &mut u64,
    score_delta: &mut u32,
    reached_target: &mut bool,
) -> Vec<Cell> {
    let mut resolved = compact(line);

    let mut i = 0;
    while i + 1 < resolved.len() {
        let (a, b) = (resolved[i], resolved[i + 1]);
        match (a.value, b.value) {
            (Some(left), Some(right)) if left == right => {
                let fused = left * 2;
                *next_id += 1;
                resolved[i] = Cell {
                    value: Some(fused),
                    id: *next_id,
                    merged_from: Some((a.id, b.id)),
                };
                resolved[i + 1] = Cell::empty();
                *score_delta += fused;
                if fused == TARGET_TILE {
                    *reached_target = true;
                }
                // A fused tile never fuses again within the same move.
                i += 2;
            }
            _ => i += 1,
        }
    }

    compact(&resolved)
}

/// Shift the occupied slots to the front, preserving order, padding the
/// tail with empties.
fn compact(line: &[Cell]) -> Vec<Cell> {
    let mut out: Vec<Cell> = line.iter().copied().filter(|cell| !cell.is_empty()).collect();
    out.resize(line.len(), Cell::empty());
    out
}
