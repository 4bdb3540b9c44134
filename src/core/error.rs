//! Error types for the engine.

use std::time::Duration;

use thiserror::Error;

use super::grid::MIN_DIMENSION;

/// Why a snapshot payload was rejected. The current grid is never touched.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("snapshot is not a matrix of cell tokens: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("snapshot has no rows")]
    Empty,

    #[error("snapshot is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("snapshot dimension {0} is below the minimum of {}", MIN_DIMENSION)]
    TooSmall(usize),
}

/// Errors surfaced by the simulation.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("invalid snapshot: {0}")]
    Import(#[from] ImportError),

    #[error("grid dimension {0} is below the minimum of {}", MIN_DIMENSION)]
    InvalidDimension(usize),

    #[error("frame rate must be finite and positive, got {0}")]
    InvalidFrameRate(f64),

    #[error("alive probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    #[error("invalid engine config: {0}")]
    Config(#[source] serde_json::Error),

    #[error("worker pool needs at least one worker")]
    EmptyPool,

    #[error("failed to start worker pool: {0}")]
    PoolBuild(String),

    #[error("worker {worker} failed on rows {start}..{end}: {message}")]
    WorkerFailed {
        worker: usize,
        start: usize,
        end: usize,
        message: String,
    },

    #[error("generation timed out after {elapsed:?} with {pending} worker(s) still running")]
    Timeout { elapsed: Duration, pending: usize },
}
