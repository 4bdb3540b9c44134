//! Life rules and the per-band generation step

pub mod generation;
pub mod neighbors;
pub mod rules;

pub use generation::{evaluate_band, next_generation};
pub use neighbors::{neighbors, NeighborCache, Neighbors};
