//! Stalemate detection.

use crate::game::grid::Grid;

/// True while at least one move can still change the grid: either a slot is
/// free, or two equal tiles sit next to each other horizontally or
/// vertically. False means every direction is a dead end; evaluate this
/// right after each spawn to catch the loss.
pub fn is_move_available(grid: &Grid) -> bool {
    let size = grid.len();

    for row in grid {
        for cell in row {
            if cell.is_empty() {
                return true;
            }
        }
    }

    // Full grid: look for a fusable neighbour pair.
    for y in 0..size {
        for x in 0..size {
            let value = grid[y][x].value;
            if x + 1 < size && grid[y][x + 1].value == value {
                return true;
            }
            if y + 1 < size && grid[y + 1][x].value == value {
                return true;
            }
        }
    }

    false
}
