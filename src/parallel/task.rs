use std::any::Any;
use std::ops::Range;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::core::{Cell, Grid};
use crate::systems::neighbors::NeighborCache;

/// Band evaluation entry point run by each worker
pub(crate) type BandEvaluator = fn(&Grid, Range<usize>, &mut NeighborCache) -> Vec<Cell>;

/// One worker's share of a generation: the shared read-only snapshot plus
/// the rows it owns.
#[derive(Clone, Debug)]
pub struct Task {
    pub worker: usize,
    pub snapshot: Arc<Grid>,
    pub start: usize,
    pub end: usize,
}

impl Task {
    pub fn new(worker: usize, snapshot: Arc<Grid>, rows: Range<usize>) -> Self {
        Self {
            worker,
            snapshot,
            start: rows.start,
            end: rows.end,
        }
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Updated rows `start..end`, flattened row-major
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BandResult {
    pub worker: usize,
    pub start: usize,
    pub end: usize,
    pub cells: Vec<Cell>,
}

/// What a worker hands back: its result (or panic message) and its cache
pub(crate) struct WorkerReport {
    pub(crate) worker: usize,
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) cache: NeighborCache,
    pub(crate) outcome: Result<Vec<Cell>, String>,
}

pub(crate) fn run_task(task: Task, mut cache: NeighborCache, evaluate: BandEvaluator) -> WorkerReport {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        evaluate(&task.snapshot, task.rows(), &mut cache)
    }))
    .map_err(panic_message);

    WorkerReport {
        worker: task.worker,
        start: task.start,
        end: task.end,
        cache,
        outcome,
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "worker panicked".to_string()
    }
}
