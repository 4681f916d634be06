use crate::core::error::ConfigError;
use crate::domain::config::SimConfig;
use crate::domain::particles::ParticleStore;
use crate::spatial::field::{DensityField, FootprintOrigin};
use crate::systems::integrator::IntegratorParams;
use crate::systems::obstacle::Obstacle;

use super::perf_stats::PerfStats;
use super::scheduler::StepScheduler;
use super::WorldCore;

pub(super) fn create_world_core(config: SimConfig) -> Result<WorldCore, ConfigError> {
    config.validate().inspect_err(warn_rejected)?;
    Ok(build_world_core(config))
}

pub(super) fn create_world_core_from_json(json: &str) -> Result<WorldCore, ConfigError> {
    let config = SimConfig::from_json(json).inspect_err(warn_rejected)?;
    Ok(build_world_core(config))
}

fn warn_rejected(err: &ConfigError) {
    log::warn!("rejected world config: {err}");
}

/// Build a world from an already validated config: border, obstacle, then
/// one footprint per particle.
pub(super) fn build_world_core(config: SimConfig) -> WorldCore {
    let mut field = DensityField::new(config.width, config.height);
    field.fill_border(config.border_density, config.border_thickness);

    let obstacle = config
        .obstacle
        .map(|obstacle| Obstacle::spawn(&mut field, obstacle));

    let particles = ParticleStore::spawn(
        config.particle_count as usize,
        &config.spawn,
        config.initial_velocity_range,
        config.seed,
    );
    for particle in particles.iter() {
        let origin = FootprintOrigin::of(&field, particle.x, particle.y);
        field.add_footprint(origin);
    }

    let (mask_x, mask_y) = IntegratorParams::masks_for(config.width, config.height);
    let params = IntegratorParams {
        gradient_shift: config.gradient_shift,
        gravity: config.gravity,
        friction: config.friction,
        force_coupling: config.force_coupling,
        mask_x,
        mask_y,
    };

    let scheduler = StepScheduler::new(config.step_ms, config.max_backlog);
    let colors = vec![0u32; (config.width * config.height) as usize];

    log::info!(
        "world {}x{} with {} particles, obstacle {}",
        config.width,
        config.height,
        particles.len(),
        if obstacle.is_some() { "on" } else { "off" },
    );

    WorldCore {
        config,
        field,
        particles,
        obstacle,
        scheduler,
        params,
        colors,
        step: 0,
        frame: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
