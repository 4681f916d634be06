//! Densefield Engine - fixed-point density-field particle simulation in WASM
//!
//! Every particle stamps a small Gaussian footprint into a shared density
//! field and is pushed down that field's gradient. A moving obstacle and a
//! dense border shape the flow.
//!
//! Architecture:
//! - core/        - fixed-point math, errors, logging
//! - spatial/     - padded density field and footprint stamping
//! - domain/      - config and particle storage
//! - systems/     - forces, integrator, obstacle mover
//! - simulation/  - world, step scheduler, render extraction, JS facade

pub mod core;
pub mod spatial;
pub mod domain;
pub mod systems;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    crate::core::logging::init_logger(log::LevelFilter::Info);
    log::info!("densefield engine {} initialized", version());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::error::ConfigError;
pub use domain::config::{ObstacleConfig, SimConfig, SpawnRegion};
pub use domain::particles::{Particle, ParticleStore};
pub use simulation::{ManualClock, PerfStats, TickSource, WallClock, World, WorldCore};
