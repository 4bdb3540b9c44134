use crate::core::Grid;

/// Row-major `CELL_DEAD` / `CELL_ALIVE` bytes for the JS renderer.
/// `out` keeps its allocation across frames.
pub(super) fn extract_cells(grid: &Grid, out: &mut Vec<u8>) {
    out.clear();
    out.extend(grid.cells().iter().map(|cell| cell.as_u8()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, CELL_ALIVE, CELL_DEAD};

    #[test]
    fn bytes_follow_row_major_order() {
        let mut grid = Grid::new(3);
        grid.set(0, 2, Cell::Alive);
        grid.set(2, 0, Cell::Alive);
        let mut out = vec![9; 20];
        extract_cells(&grid, &mut out);
        assert_eq!(out.len(), 9);
        assert_eq!(out[2], CELL_ALIVE);
        assert_eq!(out[6], CELL_ALIVE);
        assert_eq!(out.iter().filter(|&&b| b == CELL_DEAD).count(), 7);
    }
}
