//! Moore neighborhood lookup with a per-dimension coordinate cache
//!
//! Bounded topology: edge and corner cells simply have fewer neighbors.
//! The cache remembers, per cell, which of the 8 offsets land inside the
//! grid. It is bound to one dimension at a time and rebuilt from scratch
//! when asked about a grid of another size, so a stale entry can never be
//! applied to the wrong grid.

use std::ops::Deref;

use crate::core::{Cell, Grid};

pub type Coord = (usize, usize);

/// Offsets in lookup order (row-major around the center, center skipped)
#[rustfmt::skip]
const MOORE_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

pub const MAX_NEIGHBORS: usize = MOORE_OFFSETS.len();

/// In-bounds neighbor coordinates of `(x, y)`, uncached
pub fn neighbor_coords(x: usize, y: usize, dimension: usize) -> Vec<Coord> {
    let n = dimension as isize;
    MOORE_OFFSETS
        .iter()
        .map(|&(dx, dy)| (x as isize + dx, y as isize + dy))
        .filter(|&(nx, ny)| nx >= 0 && nx < n && ny >= 0 && ny < n)
        .map(|(nx, ny)| (nx as usize, ny as usize))
        .collect()
}

#[derive(Debug, Default)]
pub struct NeighborCache {
    dimension: usize,
    slots: Vec<Option<Box<[Coord]>>>,
    cached: usize,
    hits: u64,
    misses: u64,
}

impl NeighborCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dimension the entries belong to (0 before first use)
    pub fn dimension(&self) -> usize { self.dimension }

    /// Number of cells with a cached coordinate list
    pub fn len(&self) -> usize { self.cached }

    pub fn is_empty(&self) -> bool { self.cached == 0 }

    pub fn hits(&self) -> u64 { self.hits }

    pub fn misses(&self) -> u64 { self.misses }

    pub fn contains(&self, x: usize, y: usize, dimension: usize) -> bool {
        self.dimension == dimension
            && x < dimension
            && y < dimension
            && self.slots[x * dimension + y].is_some()
    }

    /// Drop every entry when `dimension` differs from the bound one
    fn bind(&mut self, dimension: usize) {
        if self.dimension == dimension && self.slots.len() == dimension * dimension {
            return;
        }
        self.dimension = dimension;
        self.slots.clear();
        self.slots.resize(dimension * dimension, None);
        self.cached = 0;
    }

    /// Cached in-bounds neighbor coordinates, computed on first request
    pub fn coords(&mut self, x: usize, y: usize, dimension: usize) -> &[Coord] {
        assert!(
            x < dimension && y < dimension,
            "neighbor lookup out of bounds: ({}, {}) in {}x{} grid",
            x,
            y,
            dimension,
            dimension
        );
        self.bind(dimension);
        let idx = x * dimension + y;
        if self.slots[idx].is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
            self.cached += 1;
        }
        self.slots[idx].get_or_insert_with(|| neighbor_coords(x, y, dimension).into_boxed_slice())
    }
}

/// Up to 8 neighbor states, no heap allocation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Neighbors {
    cells: [Cell; MAX_NEIGHBORS],
    len: usize,
}

impl Neighbors {
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells[..self.len]
    }
}

impl Deref for Neighbors {
    type Target = [Cell];

    fn deref(&self) -> &[Cell] {
        self.as_slice()
    }
}

/// Neighbor states of `(x, y)` in fixed offset order, skipping out-of-bounds cells
pub fn neighbors(x: usize, y: usize, grid: &Grid, cache: &mut NeighborCache) -> Neighbors {
    let mut out = Neighbors::default();
    for &(nx, ny) in cache.coords(x, y, grid.dimension()) {
        out.cells[out.len] = grid.get(nx, ny);
        out.len += 1;
    }
    out
}
