use densefield_engine::spatial::field::KERNEL_SUM;
use densefield_engine::{ManualClock, SimConfig, WorldCore};

fn expected_mass(config: &SimConfig) -> u64 {
    let (w, h, t) = (
        config.width as u64,
        config.height as u64,
        config.border_thickness as u64,
    );
    let border = (w * h - (w - 2 * t) * (h - 2 * t)) * config.border_density as u64;
    let obstacle = config
        .obstacle
        .map(|o| o.width as u64 * o.height as u64 * o.density as u64)
        .unwrap_or(0);
    border + obstacle + config.particle_count as u64 * KERNEL_SUM as u64
}

#[test]
fn default_world_runs_sixty_steps_without_losing_mass() {
    let config = SimConfig::default();
    let mut world = WorldCore::new(config.clone()).unwrap();
    let spawned = world.particles().to_vec();
    let clock = ManualClock::new(0);

    world.run_frame(&clock);
    // 16ms frames at a 10ms step never exceed the backlog bound
    while world.step_count() < 60 {
        clock.advance(16);
        world.run_frame(&clock);
    }

    assert_eq!(world.skipped_steps(), 0);
    assert!(world.step_count() >= 60);
    assert_eq!(world.field().total_mass(), expected_mass(&config));

    // Sixty steps from the spawn rectangle never reach the walls or the seam
    let t = config.border_thickness;
    let inside_x = t..config.width - t;
    let inside_y = t..config.height - t;
    let mut moved = 0;
    for (p, start) in world.particles().iter().zip(spawned.iter()) {
        let (cx, cy) = ((p.x >> 4) as u32, (p.y >> 4) as u32);
        assert!(inside_x.contains(&cx), "x cell {cx} left the walled area");
        assert!(inside_y.contains(&cy), "y cell {cy} left the walled area");
        if p != start {
            moved += 1;
        }
    }
    assert!(moved > world.particles().len() / 2);
}

#[test]
fn stalled_host_drops_steps_instead_of_bursting() {
    let mut world = WorldCore::new(SimConfig {
        width: 128,
        height: 64,
        particle_count: 100,
        spawn: densefield_engine::SpawnRegion { x: 16, y: 16, width: 64, height: 32 },
        obstacle: None,
        ..SimConfig::default()
    })
    .unwrap();

    assert_eq!(world.run_frame_at(1_000), 0);
    assert_eq!(world.run_frame_at(1_100), 10);
    assert_eq!(world.skipped_steps(), 0);

    // 11 owed is one over the bound
    assert_eq!(world.run_frame_at(1_210), 1);
    assert_eq!(world.skipped_steps(), 10);
    assert_eq!(world.step_count(), 11);
    assert_eq!(world.scheduler().target_step(1_210), 21);
}

#[test]
fn config_json_round_trips_through_world() {
    let json = SimConfig::default().to_json();
    let world = WorldCore::from_config_json(&json).unwrap();
    assert_eq!(world.config(), &SimConfig::default());
}
