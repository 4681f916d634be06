//! Integrator - one fixed step of fixed-point motion per particle
//!
//! Per axis:
//!   v  = promote(vel) + (d << gradient_shift) [+ gravity on Y]
//!   v  = v * friction (rounded)
//!   vel' = demote(v)                          (round-half-up)
//!   pos' = demote(promote(pos) + v) & mask    (round-half-up, toroidal wrap)
//!
//! Narrowing back to `u16`/`i16` truncates; that wraparound is part of the
//! model, not an error.

use crate::core::fixed::{Calc, Friction, Position, Velocity, CALC_FRAC, POS_FRAC, VEL_FRAC};
use crate::domain::particles::Particle;
use crate::systems::forces::Gradient;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntegratorParams {
    pub gradient_shift: u32,
    /// Added to Y velocity each step, calc units
    pub gravity: i32,
    /// Velocity multiplier, `FRICTION_FRAC` fractional bits
    pub friction: u32,
    /// When false the gradient term is skipped entirely
    pub force_coupling: bool,
    pub mask_x: u16,
    pub mask_y: u16,
}

impl IntegratorParams {
    /// Position masks for a `width x height` field
    pub fn masks_for(width: u32, height: u32) -> (u16, u16) {
        (
            ((width << POS_FRAC) - 1) as u16,
            ((height << POS_FRAC) - 1) as u16,
        )
    }
}

/// Toroidal wrap of a fixed-point position. `mask` must be `2^k - 1`.
#[inline(always)]
pub fn wrap(pos: u16, mask: u16) -> u16 {
    pos & mask
}

/// Advance one axis. `bias` is extra calc-precision velocity (gravity).
#[inline(always)]
pub fn integrate_axis(
    pos: u16,
    vel: i16,
    derivative: i32,
    bias: i32,
    params: &IntegratorParams,
    mask: u16,
) -> (u16, i16) {
    let mut v: Calc = Velocity::from_raw(vel as i32).convert::<CALC_FRAC>();
    if params.force_coupling {
        v += Calc::from_raw(derivative.wrapping_shl(params.gradient_shift));
    }
    v += Calc::from_raw(bias);
    v = v.mul_round(Friction::from_raw(params.friction as i32));

    let new_vel = v.convert::<VEL_FRAC>();
    let new_pos = (Position::from_raw(pos as i32).convert::<CALC_FRAC>() + v).convert::<POS_FRAC>();

    (wrap(new_pos.raw() as u16, mask), new_vel.raw() as i16)
}

/// Advance both axes of one particle in place
#[inline(always)]
pub fn integrate(particle: &mut Particle, gradient: Gradient, params: &IntegratorParams) {
    let (x, vx) = integrate_axis(particle.x, particle.vx, gradient.dx, 0, params, params.mask_x);
    let (y, vy) = integrate_axis(
        particle.y,
        particle.vy,
        gradient.dy,
        params.gravity,
        params,
        params.mask_y,
    );
    particle.x = x;
    particle.y = y;
    particle.vx = vx;
    particle.vy = vy;
}
