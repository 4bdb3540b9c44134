use lifegrid_engine::systems::{next_generation, NeighborCache};
use lifegrid_engine::{Cell, Grid};

fn grid_with(dimension: usize, live: &[(usize, usize)]) -> Grid {
    let mut grid = Grid::new(dimension);
    for &(x, y) in live {
        grid.set(x, y, Cell::Alive);
    }
    grid
}

fn sorted(mut cells: Vec<(usize, usize)>) -> Vec<(usize, usize)> {
    cells.sort_unstable();
    cells
}

#[test]
fn blinker_has_period_two() {
    let mut cache = NeighborCache::new();
    let start = grid_with(5, &[(1, 2), (2, 2), (3, 2)]);
    let one = next_generation(&start, &mut cache);
    assert_eq!(sorted(one.live_cells()), vec![(2, 1), (2, 2), (2, 3)]);
    let two = next_generation(&one, &mut cache);
    assert_eq!(two, start);
}

#[test]
fn block_is_still_life() {
    let mut cache = NeighborCache::new();
    let block = grid_with(4, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    let mut grid = block.clone();
    for _ in 0..5 {
        grid = next_generation(&grid, &mut cache);
        assert_eq!(grid, block);
    }
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let mut cache = NeighborCache::new();
    let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];
    let mut grid = grid_with(12, &glider);

    for step in 1..=3 {
        for _ in 0..4 {
            grid = next_generation(&grid, &mut cache);
        }
        let expected: Vec<_> = glider.iter().map(|&(x, y)| (x + step, y + step)).collect();
        assert_eq!(sorted(grid.live_cells()), sorted(expected), "after {} generations", step * 4);
    }
}

#[test]
fn lone_cell_and_pair_die_out() {
    let mut cache = NeighborCache::new();
    let grid = grid_with(4, &[(0, 0), (3, 2), (3, 3)]);
    assert_eq!(next_generation(&grid, &mut cache).live_count(), 0);
}

#[test]
fn corner_block_survives_without_wrapping() {
    let mut cache = NeighborCache::new();
    let block = grid_with(3, &[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(next_generation(&block, &mut cache), block);
}
