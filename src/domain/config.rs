//! Simulation config - JSON-loadable tuning knobs
//!
//! Every field has a default, so `{}` is a valid config. Field names are
//! camelCase on the wire to match the JS host.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::core::fixed::FRICTION_FRAC;
use crate::spatial::field::{MAX_DIMENSION, MIN_DIMENSION};

pub const MAX_PARTICLES: u32 = 1_000_000;
pub const MAX_GRADIENT_SHIFT: u32 = 16;
/// 1.0 in friction units
pub const FRICTION_ONE: u32 = 1 << FRICTION_FRAC;
/// Spawn velocities must fit the `i16` velocity field
pub const MAX_VELOCITY_RANGE: u16 = i16::MAX as u16;
/// Steps owed before the scheduler starts dropping them
pub const DEFAULT_MAX_BACKLOG: u32 = 10;

/// Axis-aligned rectangle in whole cells
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpawnRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObstacleConfig {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Horizontal travel to the right, in cells
    pub range: u32,
    /// Obstacle ticks spent paused at each end
    pub dwell: u32,
    /// Density written into every covered cell
    pub density: u16,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            x: 64,
            y: 320,
            width: 48,
            height: 128,
            range: 256,
            dwell: 60,
            density: 300,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimConfig {
    pub width: u32,
    pub height: u32,
    pub particle_count: u32,
    pub spawn: SpawnRegion,
    /// Initial velocities are uniform in +/- this many velocity units (1/256 cell)
    pub initial_velocity_range: u16,
    pub border_density: u16,
    pub border_thickness: u32,
    /// Left shift applied to the density gradient before it joins the velocity
    pub gradient_shift: u32,
    /// Constant added to Y velocity each step, in calc units (1/4096 cell)
    pub gravity: i32,
    /// Velocity multiplier per step, 256 == 1.0
    pub friction: u32,
    /// When false, particles ignore the field (gravity and friction only)
    pub force_coupling: bool,
    /// Logical step duration in milliseconds
    pub step_ms: u32,
    /// Backlog above which owed steps are dropped
    pub max_backlog: u32,
    pub seed: u64,
    pub obstacle: Option<ObstacleConfig>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
            particle_count: 20_000,
            spawn: SpawnRegion { x: 256, y: 64, width: 512, height: 192 },
            initial_velocity_range: 256,
            border_density: 300,
            border_thickness: 4,
            gradient_shift: 2,
            gravity: 24,
            friction: 250,
            force_coupling: true,
            step_ms: 10,
            max_backlog: DEFAULT_MAX_BACKLOG,
            seed: 1,
            obstacle: Some(ObstacleConfig::default()),
        }
    }
}

impl SimConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimension("width", self.width)?;
        check_dimension("height", self.height)?;

        if self.particle_count > MAX_PARTICLES {
            return Err(ConfigError::TooManyParticles {
                value: self.particle_count,
                max: MAX_PARTICLES,
            });
        }
        if self.step_ms == 0 {
            return Err(ConfigError::InvalidStepDuration);
        }
        if self.friction > FRICTION_ONE {
            return Err(ConfigError::InvalidFriction {
                value: self.friction,
                max: FRICTION_ONE,
            });
        }
        if self.initial_velocity_range > MAX_VELOCITY_RANGE {
            return Err(ConfigError::InvalidVelocityRange {
                value: self.initial_velocity_range,
                max: MAX_VELOCITY_RANGE,
            });
        }
        if self.gradient_shift > MAX_GRADIENT_SHIFT {
            return Err(ConfigError::InvalidGradientShift {
                value: self.gradient_shift,
                max: MAX_GRADIENT_SHIFT,
            });
        }

        let s = &self.spawn;
        if s.width == 0 || s.height == 0 || !self.fits(s.x, s.y, s.width, s.height) {
            return Err(self.out_of_bounds("spawn"));
        }

        if let Some(o) = &self.obstacle {
            let travel = o.width.saturating_add(o.range);
            if o.width == 0 || o.height == 0 || !self.fits(o.x, o.y, travel, o.height) {
                return Err(self.out_of_bounds("obstacle"));
            }
        }

        Ok(())
    }

    fn fits(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        x.saturating_add(w) <= self.width && y.saturating_add(h) <= self.height
    }

    fn out_of_bounds(&self, region: &'static str) -> ConfigError {
        ConfigError::RegionOutOfBounds {
            region,
            width: self.width,
            height: self.height,
        }
    }
}

fn check_dimension(axis: &'static str, value: u32) -> Result<(), ConfigError> {
    if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        return Err(ConfigError::DimensionOutOfRange {
            axis,
            value,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        });
    }
    if !value.is_power_of_two() {
        return Err(ConfigError::NotPowerOfTwo { axis, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        SimConfig::default().validate().expect("default config should be valid");
    }

    #[test]
    fn empty_json_yields_defaults() {
        let config = SimConfig::from_json("{}").expect("empty object should parse");
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn camel_case_overrides_parse() {
        let json = r#"{
            "width": 256,
            "height": 128,
            "particleCount": 100,
            "spawn": { "x": 8, "y": 8, "width": 64, "height": 32 },
            "gradientShift": 3,
            "stepMs": 16,
            "obstacle": null
        }"#;
        let config = SimConfig::from_json(json).expect("config should parse");
        assert_eq!(config.width, 256);
        assert_eq!(config.particle_count, 100);
        assert_eq!(config.gradient_shift, 3);
        assert_eq!(config.step_ms, 16);
        assert!(config.obstacle.is_none());
        // Unspecified fields keep defaults
        assert_eq!(config.friction, 250);
    }

    #[test]
    fn json_round_trips_through_to_json() {
        let config = SimConfig::default();
        let back = SimConfig::from_json(&config.to_json()).expect("round trip should parse");
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_non_power_of_two_dimensions() {
        let config = SimConfig { width: 1000, ..SimConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPowerOfTwo { axis: "width", value: 1000 })
        ));
    }

    #[test]
    fn rejects_oversized_dimensions() {
        let config = SimConfig { height: 8192, ..SimConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DimensionOutOfRange { axis: "height", .. })
        ));
    }

    #[test]
    fn rejects_obstacle_travel_past_edge() {
        let mut config = SimConfig::default();
        config.obstacle = Some(ObstacleConfig { x: 900, ..ObstacleConfig::default() });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RegionOutOfBounds { region: "obstacle", .. })
        ));
    }

    #[test]
    fn rejects_bad_scalars() {
        let base = SimConfig::default();
        assert!(matches!(
            SimConfig { step_ms: 0, ..base.clone() }.validate(),
            Err(ConfigError::InvalidStepDuration)
        ));
        assert!(matches!(
            SimConfig { friction: 300, ..base.clone() }.validate(),
            Err(ConfigError::InvalidFriction { .. })
        ));
        assert!(matches!(
            SimConfig { gradient_shift: 20, ..base.clone() }.validate(),
            Err(ConfigError::InvalidGradientShift { .. })
        ));
        assert!(matches!(
            SimConfig { spawn: SpawnRegion { x: 0, y: 0, width: 0, height: 4 }, ..base }.validate(),
            Err(ConfigError::RegionOutOfBounds { region: "spawn", .. })
        ));
    }

    #[test]
    fn velocity_range_must_fit_i16() {
        let base = SimConfig::default();
        assert!(matches!(
            SimConfig { initial_velocity_range: 40_000, ..base.clone() }.validate(),
            Err(ConfigError::InvalidVelocityRange { value: 40_000, max: 32_767 })
        ));
        assert!(SimConfig { initial_velocity_range: MAX_VELOCITY_RANGE, ..base }
            .validate()
            .is_ok());
    }

    #[test]
    fn default_backlog_bound_is_ten_steps() {
        assert_eq!(SimConfig::default().max_backlog, DEFAULT_MAX_BACKLOG);
        assert_eq!(DEFAULT_MAX_BACKLOG, 10);
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        assert!(matches!(SimConfig::from_json("{ width: "), Err(ConfigError::Json(_))));
    }
}
