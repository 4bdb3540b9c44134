//! Grid - square cell matrix stored as one flat row-major array
//!
//! Instead of: Vec<Vec<Cell>>  // one allocation per row
//! We have:    cells[x * n + y] // linear memory, rows are contiguous slices
//!
//! `x` is the row (band) index, `y` the column. The serialized form is the
//! same matrix as nested arrays: `rows[x][y]`.

use rand::Rng;

use super::cell::Cell;
use super::error::ImportError;

/// Smallest grid the engine accepts
pub const MIN_DIMENSION: usize = 3;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![Cell::Dead; dimension * dimension],
        }
    }

    /// Each cell independently alive with probability `alive_probability`
    pub fn random<R: Rng + ?Sized>(dimension: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..dimension * dimension)
            .map(|_| Cell::random(rng, alive_probability))
            .collect();
        Self { dimension, cells }
    }

    /// Build from nested rows, validating squareness.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, ImportError> {
        let dimension = rows.len();
        if dimension == 0 {
            return Err(ImportError::Empty);
        }
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != dimension {
                return Err(ImportError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: dimension,
                });
            }
        }
        if dimension < MIN_DIMENSION {
            return Err(ImportError::TooSmall(dimension));
        }
        Ok(Self {
            dimension,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a serialized snapshot (`[[token, ...], ...]`).
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let rows: Vec<Vec<Cell>> = serde_json::from_str(json)?;
        Self::from_rows(rows)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(self.dimension.max(1))
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn to_json(&self) -> String {
        // Vec<Vec<Cell>> has no failing Serialize path
        serde_json::to_string(&self.to_rows()).unwrap_or_else(|_| "[]".to_string())
    }

    // === Dimensions ===
    #[inline]
    pub fn dimension(&self) -> usize { self.dimension }

    #[inline]
    pub fn size(&self) -> usize { self.cells.len() }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(
            x < self.dimension && y < self.dimension,
            "index: out of bounds ({}, {}) for {}x{} grid",
            x,
            y,
            self.dimension,
            self.dimension
        );
        x * self.dimension + y
    }

    #[inline]
    pub fn in_bounds(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.dimension && (y as usize) < self.dimension
    }

    // === Cell access ===
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let idx = self.index(x, y);
        self.cells[idx] = cell;
    }

    /// Flip one cell, returning its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Cell {
        let idx = self.index(x, y);
        let next = self.cells[idx].toggled();
        self.cells[idx] = next;
        next
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] { &self.cells }

    /// Contiguous cells of rows `start..end`
    pub fn rows(&self, start: usize, end: usize) -> &[Cell] {
        &self.cells[start * self.dimension..end * self.dimension]
    }

    /// Overwrite rows starting at `start` with `cells` (whole rows only)
    pub fn write_rows(&mut self, start: usize, cells: &[Cell]) {
        debug_assert_eq!(cells.len() % self.dimension, 0, "write_rows: partial row");
        let offset = start * self.dimension;
        self.cells[offset..offset + cells.len()].copy_from_slice(cells);
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_alive())
            .map(|(idx, _)| (idx / self.dimension, idx % self.dimension))
            .collect()
    }
}
