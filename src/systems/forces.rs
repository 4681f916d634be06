//! Force Sampler - directional density gradient around a particle
//!
//! Four taps per axis over two parallel lines of the particle's 3x3
//! neighbourhood, weights {1, 2, -2, -1}. The operator is not centred:
//! it leans toward the lower/right lines of the block.
//!
//! With origin (ax, ay) at the top-left of the block:
//!   dx = F(ax, ay+1) + 2 F(ax, ay+2) - 2 F(ax+2, ay+2) - F(ax+2, ay+1)
//!   dy = F(ax+1, ay) + 2 F(ax+2, ay) - 2 F(ax+2, ay+2) - F(ax+1, ay+2)
//!
//! A positive result means the negative side is denser, so adding it to the
//! velocity pushes the particle away from density.

use crate::spatial::field::{DensityField, FootprintOrigin};

/// Gradient pair (dx, dy) in raw density units
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Gradient {
    pub dx: i32,
    pub dy: i32,
}

#[inline(always)]
pub fn sample_gradient(field: &DensityField, origin: FootprintOrigin) -> Gradient {
    let stride = field.stride();
    let base = origin.index();
    // SAFETY: every tap is within (ax..=ax+2, ay..=ay+2), the same block the
    // footprint covers, which FootprintOrigin keeps inside the padding
    let tap = |col: usize, row: usize| unsafe {
        field.get_idx_unchecked(base + row * stride + col) as i32
    };

    let dx = tap(0, 1) + 2 * tap(0, 2) - 2 * tap(2, 2) - tap(2, 1);
    let dy = tap(1, 0) + 2 * tap(2, 0) - 2 * tap(2, 2) - tap(1, 2);
    Gradient { dx, dy }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin_at_cell(field: &DensityField, cx: u16, cy: u16) -> FootprintOrigin {
        FootprintOrigin::of(field, cx << 4, cy << 4)
    }

    #[test]
    fn uniform_field_has_no_gradient() {
        let mut field = DensityField::new(32, 32);
        field.add_rect(0, 0, 32, 32, 100);
        let g = sample_gradient(&field, origin_at_cell(&field, 16, 16));
        assert_eq!(g, Gradient::default());
    }

    #[test]
    fn density_on_the_left_pushes_right() {
        let mut field = DensityField::new(32, 32);
        // Wall covering columns 0..=15
        field.add_rect(0, 0, 16, 32, 300);
        // Particle centred on column 16: left taps at 15, right taps at 17
        let g = sample_gradient(&field, origin_at_cell(&field, 16, 10));
        assert_eq!(g.dx, 3 * 300);
        assert_eq!(g.dy, 0);
    }

    #[test]
    fn density_below_pushes_up() {
        let mut field = DensityField::new(32, 32);
        // Floor covering rows 17..32
        field.add_rect(0, 17, 32, 15, 300);
        let g = sample_gradient(&field, origin_at_cell(&field, 10, 16));
        assert_eq!(g.dy, -3 * 300);
        assert_eq!(g.dx, 0);
    }

    #[test]
    fn own_footprint_cancels_out() {
        let mut field = DensityField::new(32, 32);
        let o = origin_at_cell(&field, 16, 16);
        field.add_footprint(o);
        assert_eq!(sample_gradient(&field, o), Gradient::default());
    }

    #[test]
    fn neighbour_on_the_left_pushes_right() {
        let mut field = DensityField::new(32, 32);
        let neighbour = origin_at_cell(&field, 15, 16);
        field.add_footprint(neighbour);
        let g = sample_gradient(&field, origin_at_cell(&field, 16, 16));
        // centre (30) and lower-left (7) taps of the neighbour
        assert_eq!(g.dx, 30 + 2 * 7);
        assert_eq!(g.dy, 0);
    }
}
