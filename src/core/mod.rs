//! Core data: cells, the grid, its store, configuration and errors.

pub mod cell;
pub mod config;
pub mod error;
pub mod grid;
pub(crate) mod perf_timer;
pub mod store;

pub use cell::{Cell, CELL_ALIVE, CELL_DEAD};
pub use config::EngineConfig;
pub use error::{EngineError, ImportError};
pub use grid::{Grid, MIN_DIMENSION};
pub use store::GridStore;
