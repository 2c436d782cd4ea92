//! Island counting and grid statistics.

use crate::flood::flood_fill;
use crate::grid::Grid;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Count the maximal 4-connected land components in the grid.
///
/// Non-destructive: the grid is only read, so repeated calls on the same
/// grid return the same count. An empty grid has zero islands.
pub fn count_islands(grid: &Grid) -> usize {
    island_sizes(grid).len()
}

/// Sizes of all islands in discovery (row-major) order.
pub fn island_sizes(grid: &Grid) -> Vec<usize> {
    let mut visited = vec![false; grid.len()];
    let mut sizes = Vec::new();

    for pos in grid.positions() {
        let size = flood_fill(grid, pos, &mut visited);
        if size > 0 {
            sizes.push(size);
        }
    }

    debug!(islands = sizes.len(), cells = grid.len(), "scanned grid");
    sizes
}

/// Summary statistics for a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridStats {
    pub width: i32,
    pub height: i32,
    pub islands: usize,
    pub land_cells: usize,
    pub water_cells: usize,
    pub largest_island: usize,
}

/// Compute summary statistics in a single scan
pub fn analyze(grid: &Grid) -> GridStats {
    let sizes = island_sizes(grid);
    let land_cells: usize = sizes.iter().sum();

    GridStats {
        width: grid.width,
        height: grid.height,
        islands: sizes.len(),
        land_cells,
        water_cells: grid.len() - land_cells,
        largest_island: sizes.iter().copied().max().unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isle_core::{Cell, GridGenConfig};
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_grid_has_no_islands() {
        assert_eq!(count_islands(&Grid::new(0, 0)), 0);
        assert_eq!(count_islands(&Grid::from_rows(vec![]).unwrap()), 0);
    }

    #[test]
    fn test_single_cell() {
        assert_eq!(count_islands(&Grid::parse("0").unwrap()), 0);
        assert_eq!(count_islands(&Grid::parse("1").unwrap()), 1);
    }

    #[test]
    fn test_three_islands() {
        let grid = Grid::parse(
            "11000\n\
             11000\n\
             00100\n\
             00011\n",
        )
        .unwrap();
        assert_eq!(count_islands(&grid), 3);
        assert_eq!(island_sizes(&grid), vec![4, 1, 2]);
    }

    #[test]
    fn test_all_land_is_one_island() {
        for (w, h) in [(1, 1), (3, 7), (16, 16)] {
            let rows = vec![vec![Cell::Land; w]; h];
            let grid = Grid::from_rows(rows).unwrap();
            assert_eq!(count_islands(&grid), 1);
        }
    }

    #[test]
    fn test_all_water_is_zero_islands() {
        for (w, h) in [(1, 1), (5, 2), (16, 16)] {
            let grid = Grid::new(w, h);
            assert_eq!(count_islands(&grid), 0);
        }
    }

    #[test]
    fn test_counting_is_idempotent() {
        let grid = Grid::parse("101\n010\n101\n").unwrap();
        let first = count_islands(&grid);
        let second = count_islands(&grid);
        assert_eq!(first, second);
        assert_eq!(first, 5);
        // The grid itself is untouched
        assert_eq!(grid, Grid::parse("101\n010\n101\n").unwrap());
    }

    #[test]
    fn test_transpose_preserves_count() {
        let grid = Grid::parse("1100\n0110\n0001\n1001\n").unwrap();
        assert_eq!(count_islands(&grid), count_islands(&grid.transpose()));
    }

    #[test]
    fn test_diagonal_contact_does_not_join() {
        let grid = Grid::parse("10\n01\n").unwrap();
        assert_eq!(count_islands(&grid), 2);
    }

    #[test]
    fn test_large_grid_does_not_overflow_stack() {
        // One 512x512 solid island; recursive fill would blow the call
        // stack here, the worklist version must not.
        let rows = vec![vec![Cell::Land; 512]; 512];
        let grid = Grid::from_rows(rows).unwrap();
        assert_eq!(count_islands(&grid), 1);
        assert_eq!(island_sizes(&grid), vec![512 * 512]);
    }

    #[test]
    fn test_analyze() {
        let grid = Grid::parse(
            "11000\n\
             11000\n\
             00100\n\
             00011\n",
        )
        .unwrap();
        let stats = analyze(&grid);
        assert_eq!(stats.islands, 3);
        assert_eq!(stats.land_cells, 7);
        assert_eq!(stats.water_cells, 13);
        assert_eq!(stats.largest_island, 4);
        assert_eq!(stats.width, 5);
        assert_eq!(stats.height, 4);
    }

    #[test]
    fn test_stats_serialization() {
        let stats = analyze(&Grid::parse("11\n00\n").unwrap());
        let json = serde_json::to_string(&stats).unwrap();
        let deserialized: GridStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, deserialized);
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (1i32..24, 1i32..24, any::<u64>()).prop_map(|(width, height, seed)| {
            let config = GridGenConfig {
                width,
                height,
                land_density: 0.4,
                seed,
            };
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            Grid::random(&config, &mut rng)
        })
    }

    proptest! {
        #[test]
        fn prop_count_is_idempotent(grid in arb_grid()) {
            let before = grid.clone();
            prop_assert_eq!(count_islands(&grid), count_islands(&grid));
            prop_assert_eq!(grid, before);
        }

        #[test]
        fn prop_transpose_preserves_count(grid in arb_grid()) {
            prop_assert_eq!(count_islands(&grid), count_islands(&grid.transpose()));
        }

        #[test]
        fn prop_count_bounded_by_land(grid in arb_grid()) {
            let count = count_islands(&grid);
            let land = grid.land_count();
            prop_assert!(count <= land);
            if land > 0 {
                prop_assert!(count >= 1);
            } else {
                prop_assert_eq!(count, 0);
            }
        }

        #[test]
        fn prop_sizes_sum_to_land(grid in arb_grid()) {
            let total: usize = island_sizes(&grid).iter().sum();
            prop_assert_eq!(total, grid.land_count());
        }
    }
}
