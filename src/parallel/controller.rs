//! Parallel compute controller
//!
//! A fixed pool of long-lived workers, created once. Each generation:
//! 1. Split rows into one contiguous band per worker
//! 2. Hand every worker the same `Arc<Grid>` snapshot plus its band
//! 3. Wait for all bands (barrier), failing the generation if any worker fails
//! 4. Write the bands into a fresh grid at their original rows
//!
//! Workers only read the snapshot and each returns its own rows, so the
//! outcome equals a single sequential pass. Each worker slot owns a private
//! neighbor cache that travels with the task and comes back in the report.
//!
//! Only one generation may be in flight. A request arriving while workers
//! are still busy (e.g. stragglers after a timeout) is dropped, not queued.
//!
//! wasm32 has no `std::thread`, so there the bands always run sequentially
//! on the calling thread, with or without the `parallel` feature.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use std::sync::mpsc::{self, RecvTimeoutError};
#[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
use crate::core::perf_timer::PerfTimer;

use tracing::{debug, info, warn};

use crate::core::{EngineError, Grid};
use crate::systems::generation::evaluate_band;
use crate::systems::neighbors::NeighborCache;

use super::partition::partition_rows;
use super::task::{run_task, BandEvaluator, BandResult, Task, WorkerReport};

/// Outcome of a generation request
#[derive(Debug, PartialEq, Eq)]
pub enum Generation {
    Advanced(Grid),
    /// A previous computation was still running; the grid stays as it was
    Dropped,
}

pub struct ComputeController {
    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    pool: rayon::ThreadPool,
    workers: usize,
    caches: Vec<Option<NeighborCache>>,
    in_flight: Arc<AtomicUsize>,
    timeout: Option<Duration>,
    evaluate: BandEvaluator,
}

impl ComputeController {
    pub fn new(workers: usize, timeout: Option<Duration>) -> Result<Self, EngineError> {
        if workers == 0 {
            return Err(EngineError::EmptyPool);
        }

        #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("lifegrid-worker-{i}"))
            .build()
            .map_err(|e| EngineError::PoolBuild(e.to_string()))?;

        info!(workers, ?timeout, "generation worker pool started");

        Ok(Self {
            #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
            pool,
            workers,
            caches: (0..workers).map(|_| Some(NeighborCache::new())).collect(),
            in_flight: Arc::new(AtomicUsize::new(0)),
            timeout,
            evaluate: evaluate_band,
        })
    }

    pub fn workers(&self) -> usize { self.workers }

    pub fn timeout(&self) -> Option<Duration> { self.timeout }

    pub fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    /// True while any worker task of an earlier generation is still running
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire) > 0
    }

    /// Total cached neighbor lists across idle workers
    pub fn cached_cells(&self) -> usize {
        self.caches.iter().flatten().map(NeighborCache::len).sum()
    }

    #[cfg(test)]
    pub(crate) fn set_evaluator(&mut self, evaluate: BandEvaluator) {
        self.evaluate = evaluate;
    }

    /// Compute the generation after `grid`.
    pub fn compute_generation(&mut self, grid: &Arc<Grid>) -> Result<Generation, EngineError> {
        if self.is_busy() {
            debug!("generation dropped: previous computation still in flight");
            return Ok(Generation::Dropped);
        }

        let dimension = grid.dimension();
        let tasks: Vec<Task> = partition_rows(dimension, self.workers)
            .into_iter()
            .enumerate()
            .map(|(worker, rows)| Task::new(worker, Arc::clone(grid), rows))
            .collect();

        let reports = self.dispatch(tasks)?;
        let bands = self.collect(reports, dimension)?;
        debug!(dimension, workers = self.workers, "generation computed");
        Ok(Generation::Advanced(merge(dimension, bands)))
    }

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    fn dispatch(&mut self, tasks: Vec<Task>) -> Result<Vec<WorkerReport>, EngineError> {
        let expected = tasks.len();
        let (tx, rx) = mpsc::channel::<WorkerReport>();

        for task in tasks {
            let cache = self.caches[task.worker].take().unwrap_or_default();
            let tx = tx.clone();
            let in_flight = Arc::clone(&self.in_flight);
            let evaluate = self.evaluate;
            self.in_flight.fetch_add(1, Ordering::AcqRel);
            self.pool.spawn(move || {
                let report = run_task(task, cache, evaluate);
                in_flight.fetch_sub(1, Ordering::AcqRel);
                // Receiver is gone after a timeout; the late band is discarded
                let _ = tx.send(report);
            });
        }
        drop(tx);

        let started = PerfTimer::start();
        let mut reports = Vec::with_capacity(expected);
        while reports.len() < expected {
            let received = match self.timeout {
                Some(limit) => rx.recv_timeout(started.remaining(limit)),
                None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
            };
            match received {
                Ok(report) => reports.push(report),
                Err(RecvTimeoutError::Timeout) => {
                    let pending = expected - reports.len();
                    self.restore_caches(reports);
                    let elapsed = started.elapsed();
                    warn!(?elapsed, pending, "generation timed out");
                    return Err(EngineError::Timeout { elapsed, pending });
                }
                Err(RecvTimeoutError::Disconnected) => {
                    let pending = expected - reports.len();
                    self.restore_caches(reports);
                    return Err(EngineError::WorkerFailed {
                        worker: usize::MAX,
                        start: 0,
                        end: 0,
                        message: format!("{pending} worker(s) exited without reporting"),
                    });
                }
            }
        }
        Ok(reports)
    }

    /// Without the `parallel` feature the same bands run one after another here.
    #[cfg(not(all(feature = "parallel", not(target_arch = "wasm32"))))]
    fn dispatch(&mut self, tasks: Vec<Task>) -> Result<Vec<WorkerReport>, EngineError> {
        let evaluate = self.evaluate;
        let reports = tasks
            .into_iter()
            .map(|task| {
                let cache = self.caches[task.worker].take().unwrap_or_default();
                run_task(task, cache, evaluate)
            })
            .collect();
        Ok(reports)
    }

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    fn restore_caches(&mut self, reports: Vec<WorkerReport>) {
        for report in reports {
            self.caches[report.worker] = Some(report.cache);
        }
    }

    /// Return caches to their slots and turn reports into bands. The first
    /// failing worker (by index) fails the whole generation.
    fn collect(&mut self, mut reports: Vec<WorkerReport>, dimension: usize) -> Result<Vec<BandResult>, EngineError> {
        reports.sort_by_key(|r| r.worker);
        let mut bands = Vec::with_capacity(reports.len());
        let mut failure = None;

        for report in reports {
            let WorkerReport { worker, start, end, cache, outcome } = report;
            self.caches[worker] = Some(cache);

            let message = match outcome {
                Ok(cells) if cells.len() == (end - start) * dimension => {
                    bands.push(BandResult { worker, start, end, cells });
                    continue;
                }
                Ok(cells) => format!("returned {} cells for {} rows", cells.len(), end - start),
                Err(message) => message,
            };
            warn!(worker, start, end, %message, "generation worker failed");
            failure.get_or_insert(EngineError::WorkerFailed { worker, start, end, message });
        }

        match failure {
            Some(err) => Err(err),
            None => Ok(bands),
        }
    }
}

fn merge(dimension: usize, bands: Vec<BandResult>) -> Grid {
    let mut next = Grid::new(dimension);
    let mut covered = 0;
    for band in &bands {
        debug_assert_eq!(band.start, covered, "merge: bands out of order or overlapping");
        next.write_rows(band.start, &band.cells);
        covered = band.end;
    }
    debug_assert_eq!(covered, dimension, "merge: bands do not cover the grid");
    next
}

#[cfg(test)]
mod tests {
    use std::ops::Range;

    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::core::Cell;
    use crate::systems::generation::next_generation;

    fn random_grid(dimension: usize, seed: u64) -> Arc<Grid> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Arc::new(Grid::random(dimension, 0.35, &mut rng))
    }

    fn advanced(outcome: Generation) -> Grid {
        match outcome {
            Generation::Advanced(grid) => grid,
            Generation::Dropped => panic!("generation was dropped"),
        }
    }

    fn fail_first_band(grid: &Grid, rows: Range<usize>, cache: &mut NeighborCache) -> Vec<Cell> {
        if rows.start == 0 {
            panic!("band evaluation blew up");
        }
        evaluate_band(grid, rows, cache)
    }

    fn short_band(_grid: &Grid, _rows: Range<usize>, _cache: &mut NeighborCache) -> Vec<Cell> {
        vec![Cell::Alive]
    }

    #[test]
    fn zero_workers_is_rejected() {
        assert!(matches!(ComputeController::new(0, None), Err(EngineError::EmptyPool)));
    }

    #[test]
    fn any_pool_size_matches_sequential_step() {
        for dimension in [3, 5, 17, 32] {
            let grid = random_grid(dimension, dimension as u64);
            let expected = next_generation(&grid, &mut NeighborCache::new());
            for workers in 1..=6 {
                let mut controller = ComputeController::new(workers, None).unwrap();
                let got = advanced(controller.compute_generation(&grid).unwrap());
                assert_eq!(got, expected, "dimension {dimension}, workers {workers}");
            }
        }
    }

    #[test]
    fn repeated_generations_are_deterministic() {
        let grid = random_grid(24, 7);
        let mut a = ComputeController::new(4, None).unwrap();
        let mut b = ComputeController::new(3, None).unwrap();
        let mut ga = Arc::clone(&grid);
        let mut gb = Arc::clone(&grid);
        for _ in 0..10 {
            ga = Arc::new(advanced(a.compute_generation(&ga).unwrap()));
            gb = Arc::new(advanced(b.compute_generation(&gb).unwrap()));
        }
        assert_eq!(ga, gb);
        assert!(a.cached_cells() > 0);
    }

    #[test]
    fn snapshot_is_not_mutated() {
        let grid = random_grid(12, 3);
        let before = (*grid).clone();
        let mut controller = ComputeController::new(4, None).unwrap();
        controller.compute_generation(&grid).unwrap();
        assert_eq!(*grid, before);
    }

    #[test]
    fn busy_controller_drops_request() {
        let grid = random_grid(8, 1);
        let mut controller = ComputeController::new(4, None).unwrap();
        controller.in_flight.store(1, Ordering::Release);
        assert_eq!(controller.compute_generation(&grid).unwrap(), Generation::Dropped);
        controller.in_flight.store(0, Ordering::Release);
        assert!(matches!(controller.compute_generation(&grid).unwrap(), Generation::Advanced(_)));
    }

    #[test]
    fn worker_panic_fails_generation() {
        let grid = random_grid(8, 2);
        let mut controller = ComputeController::new(4, None).unwrap();
        controller.set_evaluator(fail_first_band);
        let err = controller.compute_generation(&grid).unwrap_err();
        match err {
            EngineError::WorkerFailed { worker, start, end, message } => {
                assert_eq!((worker, start, end), (0, 0, 2));
                assert!(message.contains("blew up"));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(!controller.is_busy());

        controller.set_evaluator(evaluate_band);
        assert!(matches!(controller.compute_generation(&grid).unwrap(), Generation::Advanced(_)));
    }

    #[test]
    fn short_band_is_a_failure() {
        let grid = random_grid(8, 2);
        let mut controller = ComputeController::new(2, None).unwrap();
        controller.set_evaluator(short_band);
        assert!(matches!(
            controller.compute_generation(&grid),
            Err(EngineError::WorkerFailed { worker: 0, .. })
        ));
    }

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    fn slow_band(grid: &Grid, rows: Range<usize>, cache: &mut NeighborCache) -> Vec<Cell> {
        std::thread::sleep(Duration::from_millis(300));
        evaluate_band(grid, rows, cache)
    }

    #[cfg(all(feature = "parallel", not(target_arch = "wasm32")))]
    #[test]
    fn timeout_fails_generation_then_drops_until_workers_finish() {
        let grid = random_grid(8, 4);
        let mut controller = ComputeController::new(2, Some(Duration::from_millis(20))).unwrap();
        controller.set_evaluator(slow_band);

        let err = controller.compute_generation(&grid).unwrap_err();
        assert!(matches!(err, EngineError::Timeout { pending: 2, .. }));
        assert!(controller.is_busy());
        assert_eq!(controller.compute_generation(&grid).unwrap(), Generation::Dropped);

        let deadline = std::time::Instant::now() + Duration::from_secs(5);
        while controller.is_busy() && std::time::Instant::now() < deadline {
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(!controller.is_busy());

        controller.set_evaluator(evaluate_band);
        let expected = next_generation(&grid, &mut NeighborCache::new());
        assert_eq!(advanced(controller.compute_generation(&grid).unwrap()), expected);
    }
}
