//! Tick sources for the step scheduler

use std::cell::Cell;

/// Monotonic millisecond clock
pub trait TickSource {
    fn now_ms(&self) -> u64;
}

/// Host wall clock: `Date.now()` in the browser, `Instant` elsewhere
#[derive(Clone, Copy)]
pub struct WallClock {
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl WallClock {
    pub fn new() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            WallClock {}
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            WallClock { start: std::time::Instant::now() }
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for WallClock {
    fn now_ms(&self) -> u64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now().max(0.0) as u64
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_millis() as u64
        }
    }
}

/// Hand-driven clock for headless runs and tests
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Cell::new(start_ms) }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl TickSource for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(100);
        clock.advance(25);
        assert_eq!(clock.now_ms(), 125);
        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let clock = WallClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
