use std::time::Duration;

use serde::{de, Deserialize, Serialize};

use super::error::EngineError;
use super::grid::MIN_DIMENSION;

pub const DEFAULT_POOL_SIZE: usize = 4;
pub const DEFAULT_FRAME_RATE: f64 = 10.0;
pub const DEFAULT_NUMBER_OF_CELLS: usize = 10;
pub const DEFAULT_ALIVE_PROBABILITY: f64 = 0.05;
pub const DEFAULT_GENERATION_TIMEOUT_MS: u64 = 5_000;

/// Engine settings, loadable from a camelCase JSON object. Missing fields
/// take defaults; unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Number of long-lived generation workers
    pub pool_size: usize,
    /// Generations per second while playing
    pub frame_rate: f64,
    /// Grid dimension used for the first (lazy) initialization
    pub number_of_cells: usize,
    pub alive_probability: f64,
    /// `None` waits on workers indefinitely
    pub generation_timeout_ms: Option<u64>,
    /// Fixed seed for randomized grids; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            frame_rate: DEFAULT_FRAME_RATE,
            number_of_cells: DEFAULT_NUMBER_OF_CELLS,
            alive_probability: DEFAULT_ALIVE_PROBABILITY,
            generation_timeout_ms: Some(DEFAULT_GENERATION_TIMEOUT_MS),
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(EngineError::Config)?;
        // Derived structs also deserialize from arrays; only objects are configs
        if !value.is_object() {
            return Err(EngineError::Config(<serde_json::Error as de::Error>::custom(
                "engine config must be a JSON object",
            )));
        }
        let config: EngineConfig = serde_json::from_value(value).map_err(EngineError::Config)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.pool_size == 0 {
            return Err(EngineError::EmptyPool);
        }
        validate_frame_rate(self.frame_rate)?;
        validate_dimension(self.number_of_cells)?;
        if !(0.0..=1.0).contains(&self.alive_probability) {
            return Err(EngineError::InvalidProbability(self.alive_probability));
        }
        Ok(())
    }

    pub fn generation_timeout(&self) -> Option<Duration> {
        self.generation_timeout_ms.map(Duration::from_millis)
    }
}

pub(crate) fn validate_frame_rate(frame_rate: f64) -> Result<(), EngineError> {
    if frame_rate.is_finite() && frame_rate > 0.0 {
        Ok(())
    } else {
        Err(EngineError::InvalidFrameRate(frame_rate))
    }
}

pub(crate) fn validate_dimension(dimension: usize) -> Result<(), EngineError> {
    if dimension < MIN_DIMENSION {
        return Err(EngineError::InvalidDimension(dimension));
    }
    Ok(())
}
