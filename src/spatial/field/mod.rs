//! Density Field - padded grid of fixed-width accumulators
//!
//! Logical cells are `width x height` (both powers of two). The buffer
//! carries `MARGIN` extra cells on every side so footprints and gradient taps
//! centred anywhere on a wrapped particle position stay in-buffer without
//! per-access bounds checks.
//!
//! Layout (row-major, stride = width + 2 * MARGIN):
//!   padded (px, py) = logical (x + MARGIN, y + MARGIN)

mod footprint;
mod indexing;

pub use footprint::{FootprintOrigin, KERNEL, KERNEL_SUM};

/// Cell accumulator type
pub type Density = u16;

/// Padding cells on each side of the logical area
pub const MARGIN: u32 = 2;

/// Largest logical dimension (keeps `dim << POS_FRAC` inside `u16`)
pub const MAX_DIMENSION: u32 = 4096;

/// Smallest logical dimension
pub const MIN_DIMENSION: u32 = 8;

pub struct DensityField {
    width: u32,
    height: u32,
    stride: usize,
    padded_height: usize,
    cells: Vec<Density>,
}

impl DensityField {
    /// Allocate an all-zero field.
    ///
    /// Panics if either dimension is not a power of two within
    /// `MIN_DIMENSION..=MAX_DIMENSION`; config validation rejects those first.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(
            width.is_power_of_two() && (MIN_DIMENSION..=MAX_DIMENSION).contains(&width),
            "DensityField width must be a power of two in {}..={}, got {}",
            MIN_DIMENSION,
            MAX_DIMENSION,
            width
        );
        assert!(
            height.is_power_of_two() && (MIN_DIMENSION..=MAX_DIMENSION).contains(&height),
            "DensityField height must be a power of two in {}..={}, got {}",
            MIN_DIMENSION,
            MAX_DIMENSION,
            height
        );

        let stride = (width + 2 * MARGIN) as usize;
        let padded_height = (height + 2 * MARGIN) as usize;
        Self {
            width,
            height,
            stride,
            padded_height,
            cells: vec![0; stride * padded_height],
        }
    }

    /// Whole padded buffer, row-major with `stride()` cells per row
    #[inline]
    pub fn cells(&self) -> &[Density] {
        &self.cells
    }

    #[inline]
    pub fn as_ptr(&self) -> *const Density {
        self.cells.as_ptr()
    }

    /// Read a logical cell. Coordinates may reach into the margin.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Density {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: Density) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Sum of every cell in the padded buffer
    pub fn total_mass(&self) -> u64 {
        self.cells.iter().map(|&c| c as u64).sum()
    }

    /// Add `amount` to every logical cell within `thickness` of an edge.
    pub fn fill_border(&mut self, amount: Density, thickness: u32) {
        if thickness == 0 {
            return;
        }
        let t = thickness.min(self.width / 2).min(self.height / 2);
        let (w, h) = (self.width, self.height);
        self.add_rect(0, 0, w, t, amount);
        self.add_rect(0, h - t, w, t, amount);
        self.add_rect(0, t, t, h - 2 * t, amount);
        self.add_rect(w - t, t, t, h - 2 * t, amount);
    }

    /// Wrapping add over a logical rectangle (clipped to the logical area)
    pub fn add_rect(&mut self, x: u32, y: u32, w: u32, h: u32, amount: Density) {
        if x >= self.width || y >= self.height {
            return;
        }
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        let run = (x_end - x) as usize;
        for yy in y..y_end {
            let row = self.index(x as i32, yy as i32);
            for cell in &mut self.cells[row..row + run] {
                *cell = cell.wrapping_add(amount);
            }
        }
    }

    /// Wrapping subtract over a logical rectangle (clipped to the logical area)
    pub fn sub_rect(&mut self, x: u32, y: u32, w: u32, h: u32, amount: Density) {
        self.add_rect(x, y, w, h, amount.wrapping_neg());
    }

    /// Wrapping add on one column slice of `h` cells starting at (x, y)
    pub fn add_column(&mut self, x: u32, y: u32, h: u32, amount: Density) {
        if x >= self.width {
            return;
        }
        let y_end = y.saturating_add(h).min(self.height);
        for yy in y..y_end {
            let idx = self.index(x as i32, yy as i32);
            self.cells[idx] = self.cells[idx].wrapping_add(amount);
        }
    }

    /// Wrapping subtract on one column slice of `h` cells starting at (x, y)
    pub fn sub_column(&mut self, x: u32, y: u32, h: u32, amount: Density) {
        self.add_column(x, y, h, amount.wrapping_neg());
    }
}
