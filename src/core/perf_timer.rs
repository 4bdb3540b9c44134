//! Stopwatch usable on both native and browser builds.
//!
//! `std::time::Instant` panics on wasm32-unknown-unknown, so the browser
//! build measures with `Date.now()` instead.

use std::time::Duration;

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[derive(Clone, Copy, Debug)]
pub(crate) struct PerfTimer {
    started: Mark,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        Self { started: now() }
    }

    pub(crate) fn elapsed(&self) -> Duration {
        #[cfg(target_arch = "wasm32")]
        {
            // Wall clock may step backwards
            Duration::from_secs_f64((now() - self.started).max(0.0) / 1000.0)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.started.elapsed()
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }

    /// Budget left out of `limit`; zero once it is spent
    pub(crate) fn remaining(&self, limit: Duration) -> Duration {
        limit.saturating_sub(self.elapsed())
    }
}

#[cfg(target_arch = "wasm32")]
fn now() -> Mark {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Mark {
    std::time::Instant::now()
}
