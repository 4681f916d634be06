use wasm_bindgen::prelude::*;

use crate::domain::config::SimConfig;
use crate::domain::particles::Particle;
use crate::spatial::field::{Density, MARGIN};

use super::clock::WallClock;
use super::perf_stats::PerfStats;
use super::WorldCore;

/// Shared-memory view of every buffer JS reads, in one call
#[wasm_bindgen]
pub struct AbiLayout {
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    density_ptr: u32,
    density_len_elements: u32,
    density_len_bytes: u32,
    density_stride: u32,
    density_margin: u32,
    particles_ptr: u32,
    particles_len_elements: u32,
    particles_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    #[wasm_bindgen(getter)]
    pub fn density_ptr(&self) -> u32 { self.density_ptr }
    #[wasm_bindgen(getter)]
    pub fn density_len_elements(&self) -> u32 { self.density_len_elements }
    #[wasm_bindgen(getter)]
    pub fn density_len_bytes(&self) -> u32 { self.density_len_bytes }
    #[wasm_bindgen(getter)]
    pub fn density_stride(&self) -> u32 { self.density_stride }
    #[wasm_bindgen(getter)]
    pub fn density_margin(&self) -> u32 { self.density_margin }

    #[wasm_bindgen(getter)]
    pub fn particles_ptr(&self) -> u32 { self.particles_ptr }
    #[wasm_bindgen(getter)]
    pub fn particles_len_elements(&self) -> u32 { self.particles_len_elements }
    #[wasm_bindgen(getter)]
    pub fn particles_len_bytes(&self) -> u32 { self.particles_len_bytes }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
    clock: WallClock,
}

#[wasm_bindgen]
impl World {
    /// Create a world from the default config
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            core: WorldCore::with_defaults(),
            clock: WallClock::new(),
        }
    }

    /// Create a world from a JSON config; missing keys take defaults
    #[wasm_bindgen(js_name = fromConfigJson)]
    pub fn from_config_json(json: &str) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self {
            core,
            clock: WallClock::new(),
        })
    }

    #[wasm_bindgen(js_name = defaultConfigJson)]
    pub fn default_config_json() -> String {
        SimConfig::default().to_json()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn step_count(&self) -> u64 { self.core.step_count() }

    #[wasm_bindgen(getter)]
    pub fn skipped_steps(&self) -> u64 { self.core.skipped_steps() }

    /// Current obstacle offset in cells (0 without an obstacle)
    #[wasm_bindgen(getter)]
    pub fn obstacle_offset(&self) -> u32 {
        self.core.obstacle().map(|o| o.offset()).unwrap_or(0)
    }

    /// Enable or disable per-frame perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last frame perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    pub fn set_gradient_shift(&mut self, shift: u32) {
        self.core.set_gradient_shift(shift);
    }

    pub fn set_gravity(&mut self, gravity: i32) {
        self.core.set_gravity(gravity);
    }

    pub fn set_friction(&mut self, friction: u32) {
        self.core.set_friction(friction);
    }

    pub fn set_force_coupling(&mut self, enabled: bool) {
        self.core.set_force_coupling(enabled);
    }

    /// Run the steps due by the wall clock. Call once per animation frame.
    /// Returns the number of steps simulated.
    pub fn run_frame(&mut self) -> u32 {
        self.core.run_frame(&self.clock)
    }

    /// Same as `run_frame` with a caller-supplied timestamp (ms)
    pub fn run_frame_at(&mut self, now_ms: f64) -> u32 {
        self.core.run_frame_at(now_ms.max(0.0) as u64)
    }

    /// Run exactly one step, ignoring the scheduler
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Refresh the colors buffer from the density field
    pub fn colorize(&mut self) {
        self.core.colorize();
    }

    /// Get pointer to ABGR pixels (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }

    /// Get pointer to the padded density buffer
    pub fn density_ptr(&self) -> *const Density {
        self.core.density_ptr()
    }

    pub fn density_len(&self) -> usize {
        self.core.density_len()
    }

    /// Row stride of the density buffer, in cells
    pub fn density_stride(&self) -> usize {
        self.core.density_stride()
    }

    /// Padding cells on each side of the logical grid
    pub fn density_margin(&self) -> u32 {
        MARGIN
    }

    /// Get pointer to particles: 4 x 16-bit words each (x, y, vx, vy)
    pub fn particles_ptr(&self) -> *const u16 {
        self.core.particles_ptr() as *const u16
    }

    pub fn particles_len(&self) -> usize {
        self.core.particle_count() as usize
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let colors_len = self.core.colors_len();
        let density_len = self.core.density_len();
        let particles_len = self.core.particle_count() as usize;
        AbiLayout {
            colors_ptr: self.core.colors_ptr() as u32,
            colors_len_elements: colors_len as u32,
            colors_len_bytes: (colors_len * std::mem::size_of::<u32>()) as u32,
            density_ptr: self.core.density_ptr() as u32,
            density_len_elements: density_len as u32,
            density_len_bytes: (density_len * std::mem::size_of::<Density>()) as u32,
            density_stride: self.core.density_stride() as u32,
            density_margin: MARGIN,
            particles_ptr: self.core.particles_ptr() as u32,
            particles_len_elements: particles_len as u32,
            particles_len_bytes: (particles_len * std::mem::size_of::<Particle>()) as u32,
        }
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}
