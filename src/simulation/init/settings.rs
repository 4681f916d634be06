use crate::domain::config::{FRICTION_ONE, MAX_GRADIENT_SHIFT};

use super::perf_stats::PerfStats;
use super::WorldCore;

pub(super) fn enable_perf_metrics(world: &mut WorldCore, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &WorldCore) -> PerfStats {
    world.perf_stats.clone()
}

// Live tuning. Out-of-range values clamp instead of failing so the UI
// sliders never need error handling. The stored config follows along.

pub(super) fn set_gradient_shift(world: &mut WorldCore, shift: u32) {
    let shift = shift.min(MAX_GRADIENT_SHIFT);
    world.params.gradient_shift = shift;
    world.config.gradient_shift = shift;
}

pub(super) fn set_gravity(world: &mut WorldCore, gravity: i32) {
    world.params.gravity = gravity;
    world.config.gravity = gravity;
}

pub(super) fn set_friction(world: &mut WorldCore, friction: u32) {
    let friction = friction.min(FRICTION_ONE);
    world.params.friction = friction;
    world.config.friction = friction;
}

pub(super) fn set_force_coupling(world: &mut WorldCore, enabled: bool) {
    world.params.force_coupling = enabled;
    world.config.force_coupling = enabled;
}
