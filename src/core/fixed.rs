//! Fixed-point scalars
//!
//! `Fixed<FRAC>` is an `i32` with `FRAC` implicit fractional bits.
//! Every precision change goes through `convert`, which rounds half-up
//! (add half a unit, then arithmetic shift right) when bits are dropped.
//! Arithmetic wraps: overflow is defined behaviour in this engine.

use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Particle position precision (4 fractional bits, stored as `u16`)
pub const POS_FRAC: u32 = 4;
/// Particle velocity precision (8 fractional bits, stored as `i16`)
pub const VEL_FRAC: u32 = 8;
/// Intermediate precision used while integrating
pub const CALC_FRAC: u32 = 12;
/// Friction coefficient precision (256 == 1.0)
pub const FRICTION_FRAC: u32 = 8;

pub type Position = Fixed<POS_FRAC>;
pub type Velocity = Fixed<VEL_FRAC>;
pub type Calc = Fixed<CALC_FRAC>;
pub type Friction = Fixed<FRICTION_FRAC>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Fixed<const FRAC: u32>(i32);

impl<const FRAC: u32> Fixed<FRAC> {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1 << FRAC);
    /// Raw value of half a unit (0 when there are no fractional bits)
    pub const HALF: i32 = if FRAC == 0 { 0 } else { 1 << (FRAC - 1) };

    #[inline(always)]
    pub const fn from_raw(raw: i32) -> Self {
        Self(raw)
    }

    #[inline(always)]
    pub const fn raw(self) -> i32 {
        self.0
    }

    #[inline(always)]
    pub const fn from_int(v: i32) -> Self {
        Self(v.wrapping_shl(FRAC))
    }

    /// Nearest whole unit, halves rounded up
    #[inline(always)]
    pub const fn round_to_int(self) -> i32 {
        self.0.wrapping_add(Self::HALF) >> FRAC
    }

    /// Change precision. Gaining bits is exact; losing bits rounds half-up.
    #[inline(always)]
    pub const fn convert<const TO: u32>(self) -> Fixed<TO> {
        if TO >= FRAC {
            Fixed(self.0.wrapping_shl(TO - FRAC))
        } else {
            let shift = FRAC - TO;
            Fixed(self.0.wrapping_add(1 << (shift - 1)) >> shift)
        }
    }

    /// Multiply by a coefficient in its own precision, rounding half-up.
    /// The product is formed in `i64`; the result is truncated back to `i32`.
    #[inline(always)]
    pub const fn mul_round<const F: u32>(self, coeff: Fixed<F>) -> Self {
        let half = if F == 0 { 0 } else { 1i64 << (F - 1) };
        let product = self.0 as i64 * coeff.0 as i64 + half;
        Self((product >> F) as i32)
    }
}

impl<const FRAC: u32> Add for Fixed<FRAC> {
    type Output = Self;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0.wrapping_add(rhs.0))
    }
}

impl<const FRAC: u32> Sub for Fixed<FRAC> {
    type Output = Self;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self {
        Self(self.0.wrapping_sub(rhs.0))
    }
}

impl<const FRAC: u32> AddAssign for Fixed<FRAC> {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl<const FRAC: u32> SubAssign for Fixed<FRAC> {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl<const FRAC: u32> Neg for Fixed<FRAC> {
    type Output = Self;
    #[inline(always)]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promote_then_demote_is_identity() {
        for raw in [-32768, -257, -1, 0, 1, 127, 128, 255, 32767] {
            let v = Velocity::from_raw(raw);
            let back: Velocity = v.convert::<CALC_FRAC>().convert();
            assert_eq!(back, v);
        }
        for raw in [0, 1, 15, 16, 8191, 16383, 65535] {
            let p = Position::from_raw(raw);
            let back: Position = p.convert::<CALC_FRAC>().convert();
            assert_eq!(back, p);
        }
    }

    #[test]
    fn demote_rounds_half_up() {
        // 12 -> 8 bits drops 4 bits: 8/16 is exactly half
        assert_eq!(Calc::from_raw(8).convert::<VEL_FRAC>().raw(), 1);
        assert_eq!(Calc::from_raw(7).convert::<VEL_FRAC>().raw(), 0);
        // -0.5 rounds up to 0, -0.5625 rounds to -1
        assert_eq!(Calc::from_raw(-8).convert::<VEL_FRAC>().raw(), 0);
        assert_eq!(Calc::from_raw(-9).convert::<VEL_FRAC>().raw(), -1);
    }

    #[test]
    fn round_to_int_matches_cell_rounding() {
        assert_eq!(Position::from_raw(7).round_to_int(), 0);
        assert_eq!(Position::from_raw(8).round_to_int(), 1);
        assert_eq!(Position::from_raw(23).round_to_int(), 1);
        assert_eq!(Position::from_raw(24).round_to_int(), 2);
        assert_eq!(Position::from_int(5).round_to_int(), 5);
    }

    #[test]
    fn mul_round_rounds_instead_of_truncating() {
        let half = Friction::from_raw(128);
        // 3 * 0.5 = 1.5 -> 2 (truncation would give 1)
        assert_eq!(Calc::from_raw(3).mul_round(half).raw(), 2);
        assert_eq!(Calc::from_raw(1000).mul_round(Friction::ONE).raw(), 1000);
        // large values do not overflow the intermediate product
        let big = Calc::from_raw(i32::MAX / 2);
        assert_eq!(big.mul_round(Friction::ONE), big);
    }

    #[test]
    fn arithmetic_wraps() {
        let max = Calc::from_raw(i32::MAX);
        assert_eq!((max + Calc::from_raw(1)).raw(), i32::MIN);
        assert_eq!((-Calc::from_raw(i32::MIN)).raw(), i32::MIN);
    }
}
