//! Parallel generation computation over row bands.

pub mod controller;
pub mod partition;
pub mod task;

pub use controller::{ComputeController, Generation};
pub use partition::partition_rows;
pub use task::{BandResult, Task};
