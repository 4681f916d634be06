use super::{PerfTimer, WorldCore};

/// Scheduler decision plus every due step, then count the frame
pub(super) fn run_frame_at(world: &mut WorldCore, now_ms: u64) -> u32 {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let frame_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let due = world.scheduler.due_steps(now_ms, world.step);
    for _ in 0..due {
        world.step();
    }

    world.frame += 1;

    if perf_on {
        world.perf_stats.skipped_total = world.scheduler.skipped();
        world.perf_stats.particle_count = world.particles.len() as u32;
        world.perf_stats.field_mass = world.field.total_mass();
        if let Some(start) = frame_start {
            world.perf_stats.frame_ms = start.elapsed_ms();
        }
    }

    due as u32
}
