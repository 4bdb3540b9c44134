//! Cell state
//!
//! Two states only. Visual mapping (colors, sprites) lives in the renderer.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Render buffer byte for a dead cell
pub const CELL_DEAD: u8 = 0;
/// Render buffer byte for a live cell
pub const CELL_ALIVE: u8 = 1;

/// Binary cell state.
///
/// Serialized as `"dead"` / `"alive"`. Snapshots saved by the browser build
/// used color names, so `"transparent"` and `"lightblue"` are accepted on input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    #[serde(alias = "transparent")]
    Dead,
    #[serde(alias = "lightblue")]
    Alive,
}

impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        self == Cell::Dead
    }

    #[inline]
    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }

    /// Alive with probability `p`, dead otherwise
    pub fn random<R: Rng + ?Sized>(rng: &mut R, p: f64) -> Cell {
        if rng.gen::<f64>() < p {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }

    #[inline]
    pub fn as_u8(self) -> u8 {
        match self {
            Cell::Dead => CELL_DEAD,
            Cell::Alive => CELL_ALIVE,
        }
    }
}
