//! Rule engine - B3/S23
//!
//! Pure predicates over a cell's neighbor states. The caller owns the
//! neighbor cache; nothing here keeps state.

use crate::core::Cell;

const BIRTH_THRESHOLD: usize = 3;
const DEATH_THRESHOLD_MIN: usize = 2;
const DEATH_THRESHOLD_MAX: usize = 3;

#[inline]
pub fn is_alive(cell: Cell) -> bool {
    cell.is_alive()
}

#[inline]
pub fn is_dead(cell: Cell) -> bool {
    cell.is_dead()
}

#[inline]
pub fn live_count(neighbors: &[Cell]) -> usize {
    neighbors.iter().filter(|c| c.is_alive()).count()
}

/// Dead cell comes alive on exactly three live neighbors
#[inline]
pub fn should_be_born(neighbors: &[Cell]) -> bool {
    live_count(neighbors) == BIRTH_THRESHOLD
}

/// Live cell dies of under- or overpopulation
#[inline]
pub fn should_be_dead(neighbors: &[Cell]) -> bool {
    let alive = live_count(neighbors);
    alive < DEATH_THRESHOLD_MIN || alive > DEATH_THRESHOLD_MAX
}

/// State of `cell` in the next generation given its pre-transition neighbors
#[inline]
pub fn next_state(cell: Cell, neighbors: &[Cell]) -> Cell {
    match cell {
        Cell::Dead if should_be_born(neighbors) => Cell::Alive,
        Cell::Alive if should_be_dead(neighbors) => Cell::Dead,
        unchanged => unchanged,
    }
}
