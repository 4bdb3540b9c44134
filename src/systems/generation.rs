//! Generation step over a band of rows
//!
//! Every transition reads the pre-step grid only; results go to a separate
//! buffer, so evaluation order never matters.

use std::ops::Range;

use crate::core::{Cell, Grid};

use super::neighbors::{neighbors, NeighborCache};
use super::rules::next_state;

/// Next states for rows `band.start..band.end`, flattened row-major.
pub fn evaluate_band(grid: &Grid, band: Range<usize>, cache: &mut NeighborCache) -> Vec<Cell> {
    let n = grid.dimension();
    let mut out = Vec::with_capacity(band.len() * n);
    for x in band {
        for y in 0..n {
            let around = neighbors(x, y, grid, cache);
            out.push(next_state(grid.get(x, y), &around));
        }
    }
    out
}

/// Whole-grid step on the calling thread
pub fn next_generation(grid: &Grid, cache: &mut NeighborCache) -> Grid {
    let mut next = Grid::new(grid.dimension());
    let cells = evaluate_band(grid, 0..grid.dimension(), cache);
    next.write_rows(0, &cells);
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Cell = Cell::Alive;
    const D: Cell = Cell::Dead;

    fn vertical_line() -> Grid {
        Grid::from_rows(vec![vec![D, A, D], vec![D, A, D], vec![D, A, D]]).unwrap()
    }

    #[test]
    fn vertical_line_turns_horizontal() {
        let mut cache = NeighborCache::new();
        let next = next_generation(&vertical_line(), &mut cache);
        assert_eq!(next.to_rows(), vec![vec![D, D, D], vec![A, A, A], vec![D, D, D]]);
    }

    #[test]
    fn band_covers_only_requested_rows() {
        let mut cache = NeighborCache::new();
        assert_eq!(evaluate_band(&vertical_line(), 1..2, &mut cache), vec![A, A, A]);
    }

    #[test]
    fn empty_band_yields_nothing() {
        let mut cache = NeighborCache::new();
        assert!(evaluate_band(&vertical_line(), 1..1, &mut cache).is_empty());
        assert!(cache.is_empty());
    }

    #[test]
    fn warm_cache_gives_same_result() {
        let grid = vertical_line();
        let mut cache = NeighborCache::new();
        let cold = next_generation(&grid, &mut cache);
        let warm = next_generation(&grid, &mut cache);
        assert_eq!(cold, warm);
        assert_eq!(cache.len(), 9);
    }
}
