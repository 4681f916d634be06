//! World - density-field particle simulation context
//!
//! `WorldCore` owns every mutable buffer (field, particles, obstacle,
//! scheduler counters) and is passed explicitly into each operation.
//! `World` (facade.rs) is the thin wasm_bindgen wrapper over it.
//!
//! Per frame:
//!   scheduler -> N due steps -> [obstacle, particle pass] x N -> frame += 1
//! Rendering reads the field afterwards (colorize / density_ptr).

use crate::core::error::ConfigError;
use crate::domain::config::SimConfig;
use crate::domain::particles::{Particle, ParticleStore};
use crate::spatial::field::{Density, DensityField};
use crate::systems::integrator::IntegratorParams;
use crate::systems::obstacle::Obstacle;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/scheduler.rs"]
mod scheduler;
#[path = "step/step.rs"]
mod step;
#[path = "step/frame.rs"]
mod frame;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "render/render_extract.rs"]
mod render_extract;
mod clock;
mod facade;

pub use clock::{ManualClock, TickSource, WallClock};
pub use facade::World;
pub use perf_stats::PerfStats;
pub use render_extract::{colorize_field, density_to_abgr};
pub use scheduler::StepScheduler;
pub use step::advance_particles;

use perf_timer::PerfTimer;

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    field: DensityField,
    particles: ParticleStore,
    obstacle: Option<Obstacle>,
    scheduler: StepScheduler,
    params: IntegratorParams,

    // ABGR pixels, one per logical cell (filled by colorize)
    colors: Vec<u32>,

    // Counters
    step: u64,
    frame: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Validate `config` and build a world from it
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        init::create_world_core(config)
    }

    /// World built from `SimConfig::default()`
    pub fn with_defaults() -> Self {
        init::build_world_core(SimConfig::default())
    }

    /// Parse, validate and build; missing keys take defaults
    pub fn from_config_json(json: &str) -> Result<Self, ConfigError> {
        init::create_world_core_from_json(json)
    }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn width(&self) -> u32 { self.field.width() }

    pub fn height(&self) -> u32 { self.field.height() }

    pub fn particle_count(&self) -> u32 { self.particles.len() as u32 }

    pub fn particles(&self) -> &[Particle] { self.particles.as_slice() }

    pub fn field(&self) -> &DensityField { &self.field }

    pub fn obstacle(&self) -> Option<&Obstacle> { self.obstacle.as_ref() }

    pub fn params(&self) -> &IntegratorParams { &self.params }

    /// Logical steps simulated so far
    pub fn step_count(&self) -> u64 { self.step }

    /// Logical steps dropped by the scheduler under overload
    pub fn skipped_steps(&self) -> u64 { self.scheduler.skipped() }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn scheduler(&self) -> &StepScheduler { &self.scheduler }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    pub fn set_gradient_shift(&mut self, shift: u32) {
        settings::set_gradient_shift(self, shift);
    }

    pub fn set_gravity(&mut self, gravity: i32) {
        settings::set_gravity(self, gravity);
    }

    pub fn set_friction(&mut self, friction: u32) {
        settings::set_friction(self, friction);
    }

    pub fn set_force_coupling(&mut self, enabled: bool) {
        settings::set_force_coupling(self, enabled);
    }

    /// Run one logical step right now, bypassing the scheduler
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Run every step due at `now_ms`, then count the frame.
    /// Returns the number of steps simulated.
    pub fn run_frame_at(&mut self, now_ms: u64) -> u32 {
        frame::run_frame_at(self, now_ms)
    }

    pub fn run_frame(&mut self, clock: &dyn TickSource) -> u32 {
        frame::run_frame_at(self, clock.now_ms())
    }

    // === Render buffers ===

    /// Refresh the ABGR pixel buffer from the current field
    pub fn colorize(&mut self) {
        render_extract::colorize(self);
    }

    /// Get pointer to ABGR pixels (for JS rendering), `width * height` entries
    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    /// Get pointer to the padded density buffer (row-major, `density_stride` wide)
    pub fn density_ptr(&self) -> *const Density {
        self.field.as_ptr()
    }

    pub fn density_len(&self) -> usize {
        self.field.cells().len()
    }

    pub fn density_stride(&self) -> usize {
        self.field.stride()
    }

    pub fn particles_ptr(&self) -> *const Particle {
        self.particles.as_ptr()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
