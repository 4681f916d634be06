use super::*;

impl DensityField {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    /// Cells per padded row
    #[inline]
    pub fn stride(&self) -> usize { self.stride }

    /// Rows in the padded buffer
    #[inline]
    pub fn padded_height(&self) -> usize { self.padded_height }

    // === Index conversion ===

    /// Padded buffer index of logical (x, y). Accepts coordinates down to
    /// `-MARGIN` and up to `dim + MARGIN - 1`.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            self.in_padded_bounds(x, y),
            "index: ({}, {}) outside padded {}x{} field",
            x,
            y,
            self.width,
            self.height
        );
        (y + MARGIN as i32) as usize * self.stride + (x + MARGIN as i32) as usize
    }

    #[inline]
    pub fn in_padded_bounds(&self, x: i32, y: i32) -> bool {
        let m = MARGIN as i32;
        x >= -m && x < self.width as i32 + m && y >= -m && y < self.height as i32 + m
    }

    // === Margin-padded fast path ===
    // Callers guarantee the index is inside the padded buffer. Footprint
    // origins derived from masked positions always are.

    /// Read by raw padded index - UNSAFE: `idx < cells.len()`
    #[inline(always)]
    pub(crate) unsafe fn get_idx_unchecked(&self, idx: usize) -> Density {
        debug_assert!(idx < self.cells.len());
        *self.cells.get_unchecked(idx)
    }

    /// Wrapping add by raw padded index - UNSAFE: `idx < cells.len()`
    #[inline(always)]
    pub(crate) unsafe fn add_idx_unchecked(&mut self, idx: usize, amount: Density) {
        debug_assert!(idx < self.cells.len());
        let cell = self.cells.get_unchecked_mut(idx);
        *cell = cell.wrapping_add(amount);
    }

    /// Wrapping subtract by raw padded index - UNSAFE: `idx < cells.len()`
    #[inline(always)]
    pub(crate) unsafe fn sub_idx_unchecked(&mut self, idx: usize, amount: Density) {
        debug_assert!(idx < self.cells.len());
        let cell = self.cells.get_unchecked_mut(idx);
        *cell = cell.wrapping_sub(amount);
    }
}
