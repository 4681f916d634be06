// Stopwatch for perf metrics. Browser builds read `Date.now()`, native
// builds use `Instant` for sub-millisecond resolution.

#[cfg(target_arch = "wasm32")]
type Mark = f64;
#[cfg(not(target_arch = "wasm32"))]
type Mark = std::time::Instant;

#[derive(Clone, Copy)]
pub(crate) struct PerfTimer {
    mark: Mark,
}

impl PerfTimer {
    pub(crate) fn start() -> Self {
        PerfTimer { mark: now() }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        since(self.mark)
    }
}

#[cfg(target_arch = "wasm32")]
fn now() -> Mark {
    js_sys::Date::now()
}

#[cfg(target_arch = "wasm32")]
fn since(mark: Mark) -> f64 {
    (js_sys::Date::now() - mark).max(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn now() -> Mark {
    std::time::Instant::now()
}

#[cfg(not(target_arch = "wasm32"))]
fn since(mark: Mark) -> f64 {
    mark.elapsed().as_secs_f64() * 1000.0
}
