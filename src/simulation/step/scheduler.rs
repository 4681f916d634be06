//! Step Scheduler - fixed logical rate decoupled from the frame cadence
//!
//! Each frame asks how many fixed-duration steps wall-clock time is owed.
//! A backlog above `max_backlog` is not caught up: everything but one step
//! is folded permanently into `skipped`, so a stall costs simulated time
//! instead of a burst of catch-up work.

#[derive(Clone, Debug)]
pub struct StepScheduler {
    step_ms: u64,
    max_backlog: u64,
    origin_ms: Option<u64>,
    skipped: u64,
}

impl StepScheduler {
    pub fn new(step_ms: u32, max_backlog: u32) -> Self {
        Self {
            step_ms: step_ms.max(1) as u64,
            max_backlog: max_backlog as u64,
            origin_ms: None,
            skipped: 0,
        }
    }

    /// Steps permanently dropped so far
    #[inline]
    pub fn skipped(&self) -> u64 { self.skipped }

    /// Step index wall-clock time has reached at `now_ms` (0 before the
    /// first `due_steps` call latches the origin)
    pub fn target_step(&self, now_ms: u64) -> u64 {
        match self.origin_ms {
            Some(origin) => now_ms.saturating_sub(origin) / self.step_ms,
            None => 0,
        }
    }

    /// Steps to simulate before the next render, given `simulated` steps
    /// already run. The first call latches `now_ms` as the time origin.
    pub fn due_steps(&mut self, now_ms: u64, simulated: u64) -> u64 {
        self.origin_ms.get_or_insert(now_ms);
        let target = self.target_step(now_ms);
        let owed = target.saturating_sub(simulated.saturating_add(self.skipped));

        if owed > self.max_backlog {
            let dropped = owed - 1;
            self.skipped += dropped;
            log::warn!(
                "step backlog {} exceeds {}; skipping {} steps ({} skipped total)",
                owed,
                self.max_backlog,
                dropped,
                self.skipped
            );
            return 1;
        }
        owed
    }
}
