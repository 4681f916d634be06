use wasm_bindgen::prelude::*;

/// Last-frame perf snapshot. Step timings accumulate across every step the
/// frame ran.
#[wasm_bindgen]
#[derive(Clone, Debug, Default)]
pub struct PerfStats {
    pub(super) frame_ms: f64,
    pub(super) obstacle_ms: f64,
    pub(super) particles_ms: f64,
    pub(super) steps_run: u32,
    pub(super) columns_moved: u32,
    pub(super) skipped_total: u64,
    pub(super) particle_count: u32,
    pub(super) field_mass: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn frame_ms(&self) -> f64 { self.frame_ms }
    #[wasm_bindgen(getter)]
    pub fn obstacle_ms(&self) -> f64 { self.obstacle_ms }
    #[wasm_bindgen(getter)]
    pub fn particles_ms(&self) -> f64 { self.particles_ms }
    #[wasm_bindgen(getter)]
    pub fn steps_run(&self) -> u32 { self.steps_run }
    #[wasm_bindgen(getter)]
    pub fn columns_moved(&self) -> u32 { self.columns_moved }
    #[wasm_bindgen(getter)]
    pub fn skipped_total(&self) -> u64 { self.skipped_total }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn field_mass(&self) -> u64 { self.field_mass }
}
