//! Kernel Splatter - 3x3 Gaussian footprint deposit/removal
//!
//! Every particle keeps exactly one live footprint in the field between
//! steps. The integrator removes it at the old origin, samples, moves the
//! particle and adds it back at the new origin.

use super::{Density, DensityField};
use crate::core::fixed::{Position, POS_FRAC};

/// Footprint weights, row-major, top-left first
pub const KERNEL: [[Density; 3]; 3] = [
    [2, 7, 2],
    [7, 30, 7],
    [2, 7, 2],
];

/// Mass one footprint adds to the field
pub const KERNEL_SUM: u32 = kernel_sum(&KERNEL);

const fn kernel_sum(kernel: &[[Density; 3]; 3]) -> u32 {
    let mut sum = 0;
    let mut row = 0;
    while row < 3 {
        let mut col = 0;
        while col < 3 {
            sum += kernel[row][col] as u32;
            col += 1;
        }
        row += 1;
    }
    sum
}

/// Top-left cell of a particle's 3x3 neighbourhood
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FootprintOrigin {
    /// Logical column of the top-left cell (may be -1)
    pub x: i32,
    /// Logical row of the top-left cell (may be -1)
    pub y: i32,
    idx: usize,
}

impl FootprintOrigin {
    /// Origin for a particle at fixed-point (x, y): round to the nearest
    /// cell, then step one up and one left so that cell is the kernel centre.
    ///
    /// Positions are masked to the field first, which keeps every kernel and
    /// gradient tap inside the padded buffer.
    #[inline(always)]
    pub fn of(field: &DensityField, x: u16, y: u16) -> Self {
        let x = x & field.position_mask_x();
        let y = y & field.position_mask_y();
        let cx = Position::from_raw(x as i32).round_to_int() - 1;
        let cy = Position::from_raw(y as i32).round_to_int() - 1;
        Self {
            x: cx,
            y: cy,
            idx: field.index(cx, cy),
        }
    }

    /// Padded buffer index of the top-left cell
    #[inline(always)]
    pub fn index(&self) -> usize {
        self.idx
    }
}

impl DensityField {
    /// Mask for x positions: `(width << POS_FRAC) - 1`
    #[inline(always)]
    pub fn position_mask_x(&self) -> u16 {
        ((self.width << POS_FRAC) - 1) as u16
    }

    /// Mask for y positions: `(height << POS_FRAC) - 1`
    #[inline(always)]
    pub fn position_mask_y(&self) -> u16 {
        ((self.height << POS_FRAC) - 1) as u16
    }

    /// Deposit one footprint with its top-left cell at `origin`
    #[inline(always)]
    pub fn add_footprint(&mut self, origin: FootprintOrigin) {
        let stride = self.stride;
        let base = origin.index();
        for (row, weights) in KERNEL.iter().enumerate() {
            let row_idx = base + row * stride;
            for (col, &w) in weights.iter().enumerate() {
                // SAFETY: origins come from masked positions, so the 3x3 block
                // lies within the MARGIN padding
                unsafe { self.add_idx_unchecked(row_idx + col, w) };
            }
        }
    }

    /// Exactly undo `add_footprint` at the same origin
    #[inline(always)]
    pub fn remove_footprint(&mut self, origin: FootprintOrigin) {
        let stride = self.stride;
        let base = origin.index();
        for (row, weights) in KERNEL.iter().enumerate() {
            let row_idx = base + row * stride;
            for (col, &w) in weights.iter().enumerate() {
                // SAFETY: see add_footprint
                unsafe { self.sub_idx_unchecked(row_idx + col, w) };
            }
        }
    }
}
