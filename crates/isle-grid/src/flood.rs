//! Worklist-based flood fill.

use crate::grid::Grid;
use isle_core::Position;

/// Flood-fill the 4-connected land component containing `start`, marking
/// every reached cell in `visited`, and return the component size.
///
/// Uses an explicit stack instead of recursion so large grids cannot
/// overflow the call stack. The stack holds at most one entry per cell,
/// so memory stays O(width * height). If `start` is water or already
/// visited, nothing is marked and the size is 0.
pub fn flood_fill(grid: &Grid, start: Position, visited: &mut [bool]) -> usize {
    let start_index = match grid.get(start) {
        Some(cell) if cell.is_land() => grid.pos_to_index(start),
        _ => return 0,
    };
    if visited[start_index] {
        return 0;
    }

    let mut stack = vec![start];
    visited[start_index] = true;
    let mut size = 0;

    while let Some(pos) = stack.pop() {
        size += 1;

        for neighbor in grid.neighbors4(pos) {
            let index = grid.pos_to_index(neighbor);
            if visited[index] {
                continue;
            }
            // neighbors4 only yields in-bounds positions
            if grid.get(neighbor).is_some_and(|cell| cell.is_land()) {
                visited[index] = true;
                stack.push(neighbor);
            }
        }
    }

    size
}
