use crate::spatial::field::{Density, DensityField};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::WorldCore;

/// Map one density value to an opaque ABGR pixel (little-endian RGBA bytes).
/// Red saturates first, then green at 4x, blue at 16x.
#[inline(always)]
pub fn density_to_abgr(density: Density) -> u32 {
    let d = density as u32;
    let r = d.min(255);
    let g = (d >> 2).min(255);
    let b = (d >> 4).min(255);
    0xFF00_0000 | (b << 16) | (g << 8) | r
}

/// Colorize the logical cells of `field` into `out` (row-major, `width` wide).
/// Padding is never drawn.
pub fn colorize_field(field: &DensityField, out: &mut [u32]) {
    let width = field.width() as usize;
    debug_assert_eq!(out.len(), width * field.height() as usize);

    #[cfg(feature = "parallel")]
    {
        out.par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| fill_row(field, y, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        for (y, row) in out.chunks_mut(width).enumerate() {
            fill_row(field, y, row);
        }
    }
}

#[inline]
fn fill_row(field: &DensityField, y: usize, row: &mut [u32]) {
    let start = field.index(0, y as i32);
    let cells = &field.cells()[start..start + row.len()];
    for (pixel, &density) in row.iter_mut().zip(cells) {
        *pixel = density_to_abgr(density);
    }
}

pub(super) fn colorize(world: &mut WorldCore) {
    colorize_field(&world.field, &mut world.colors);
}
