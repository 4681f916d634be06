use crate::domain::particles::Particle;
use crate::spatial::field::{DensityField, FootprintOrigin};
use crate::systems::forces::sample_gradient;
use crate::systems::integrator::{integrate, IntegratorParams};

use super::{PerfTimer, WorldCore};

/// One logical step: obstacle edit, then the full particle pass
pub(super) fn step(world: &mut WorldCore) {
    let perf_on = world.perf_enabled;
    let step_index = world.step;

    // === OBSTACLE ===
    // Moves before particles so they react to its new edges this step
    if let Some(obstacle) = world.obstacle.as_mut() {
        if perf_on {
            let t0 = PerfTimer::start();
            let moved = obstacle.update(&mut world.field, step_index);
            world.perf_stats.obstacle_ms += t0.elapsed_ms();
            world.perf_stats.columns_moved += moved;
        } else {
            obstacle.update(&mut world.field, step_index);
        }
    }

    // === PARTICLE PASS ===
    if perf_on {
        let t0 = PerfTimer::start();
        advance_particles(&mut world.field, world.particles.as_mut_slice(), &world.params);
        world.perf_stats.particles_ms += t0.elapsed_ms();
        world.perf_stats.steps_run += 1;
    } else {
        advance_particles(&mut world.field, world.particles.as_mut_slice(), &world.params);
    }

    world.step += 1;
}

/// Move every particle one step, in store order.
///
/// Each particle lifts its own footprint, samples the field without it,
/// integrates, and deposits again at the new position. Other particles'
/// footprints may already reflect this step; `+=`/`-=` commute, so the final
/// field does not depend on order.
pub fn advance_particles(field: &mut DensityField, particles: &mut [Particle], params: &IntegratorParams) {
    for particle in particles.iter_mut() {
        let old = FootprintOrigin::of(field, particle.x, particle.y);
        field.remove_footprint(old);

        let gradient = sample_gradient(field, old);
        integrate(particle, gradient, params);

        let new = FootprintOrigin::of(field, particle.x, particle.y);
        field.add_footprint(new);
    }
}
