//! Engine errors
//!
//! Only configuration can fail. Everything past construction works on
//! pre-allocated buffers and is infallible.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{axis} must be a power of two, got {value}")]
    NotPowerOfTwo { axis: &'static str, value: u32 },
    #[error("{axis} must be within {min}..={max}, got {value}")]
    DimensionOutOfRange {
        axis: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("{region} does not fit inside the {width}x{height} field")]
    RegionOutOfBounds {
        region: &'static str,
        width: u32,
        height: u32,
    },
    #[error("stepMs must be at least 1")]
    InvalidStepDuration,
    #[error("friction must be at most {max}, got {value}")]
    InvalidFriction { value: u32, max: u32 },
    #[error("initialVelocityRange must be at most {max}, got {value}")]
    InvalidVelocityRange { value: u16, max: u16 },
    #[error("gradientShift must be at most {max}, got {value}")]
    InvalidGradientShift { value: u32, max: u32 },
    #[error("particleCount must be at most {max}, got {value}")]
    TooManyParticles { value: u32, max: u32 },
}
