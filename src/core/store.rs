//! Grid Store - owns the current grid and its dimension
//!
//! The grid is created lazily: after construction, `resize` or `discard`
//! nothing exists until `ensure_initialized` randomizes a fresh one.

use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::warn;

use super::cell::Cell;
use super::config::validate_dimension;
use super::error::{EngineError, ImportError};
use super::grid::Grid;

pub struct GridStore {
    dimension: usize,
    grid: Option<Arc<Grid>>,
    alive_probability: f64,
    rng: SmallRng,
}

impl GridStore {
    pub fn new(dimension: usize, alive_probability: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self {
            dimension,
            grid: None,
            alive_probability,
            rng,
        }
    }

    pub fn dimension(&self) -> usize { self.dimension }

    pub fn grid(&self) -> Option<&Arc<Grid>> { self.grid.as_ref() }

    pub fn has_grid(&self) -> bool { self.grid.is_some() }

    /// Randomize a grid for the current dimension unless one already exists.
    pub fn ensure_initialized(&mut self) -> Arc<Grid> {
        if let Some(grid) = &self.grid {
            return Arc::clone(grid);
        }
        let grid = Arc::new(Grid::random(self.dimension, self.alive_probability, &mut self.rng));
        self.grid = Some(Arc::clone(&grid));
        grid
    }

    /// Flip one cell. Returns the new state, or `None` when no grid exists
    /// or the coordinate is outside it.
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        let grid = self.grid.as_mut()?;
        if x >= grid.dimension() || y >= grid.dimension() {
            return None;
        }
        Some(Arc::make_mut(grid).toggle(x, y))
    }

    /// Kill every cell. With no grid yet, an all-dead grid is materialized.
    pub fn clear(&mut self) {
        match self.grid.as_mut() {
            Some(grid) => Arc::make_mut(grid).clear(),
            None => self.grid = Some(Arc::new(Grid::new(self.dimension))),
        }
    }

    /// Change the dimension; the old content is dropped and re-randomized lazily.
    pub fn resize(&mut self, dimension: usize) -> Result<(), EngineError> {
        validate_dimension(dimension)?;
        self.dimension = dimension;
        self.grid = None;
        Ok(())
    }

    /// Drop the grid, keeping the dimension.
    pub fn discard(&mut self) {
        self.grid = None;
    }

    pub(crate) fn replace(&mut self, grid: Grid) {
        debug_assert_eq!(grid.dimension(), self.dimension, "replace: dimension changed");
        self.grid = Some(Arc::new(grid));
    }

    /// Row-major JSON matrix, or `None` before the first initialization.
    pub fn export_snapshot(&self) -> Option<String> {
        self.grid.as_ref().map(|grid| grid.to_json())
    }

    /// Validate and adopt a serialized grid. On failure the current grid is kept.
    pub fn import_snapshot(&mut self, json: &str) -> Result<Arc<Grid>, ImportError> {
        let grid = match Grid::from_json(json) {
            Ok(grid) => Arc::new(grid),
            Err(err) => {
                warn!(%err, "snapshot import rejected");
                return Err(err);
            }
        };
        self.dimension = grid.dimension();
        self.grid = Some(Arc::clone(&grid));
        Ok(grid)
    }
}
