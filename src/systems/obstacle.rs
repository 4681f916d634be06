//! Obstacle Mover - a solid block sliding back and forth through the field
//!
//! The block is painted once; after that each move edits exactly two column
//! slices (trailing edge out, leading edge in), so the cost per step does not
//! depend on block size. It advances on even logical steps only.

use crate::domain::config::ObstacleConfig;
use crate::spatial::field::DensityField;

pub struct Obstacle {
    config: ObstacleConfig,
    offset: u32,
}

impl Obstacle {
    /// Paint the block at offset 0 and return its mover
    pub fn spawn(field: &mut DensityField, config: ObstacleConfig) -> Self {
        field.add_rect(config.x, config.y, config.width, config.height, config.density);
        Self { config, offset: 0 }
    }

    #[inline]
    pub fn offset(&self) -> u32 {
        self.offset
    }

    #[inline]
    pub fn config(&self) -> &ObstacleConfig {
        &self.config
    }

    /// Obstacle ticks in one full out-and-back cycle
    #[inline]
    pub fn period(&self) -> u64 {
        2 * (self.config.range as u64 + self.config.dwell as u64)
    }

    /// Triangle wave with a dwell plateau at each end:
    /// rest at 0, travel out to `range`, rest, travel back.
    pub fn offset_at(&self, tick: u64) -> u32 {
        let range = self.config.range as u64;
        let dwell = self.config.dwell as u64;
        if range == 0 {
            return 0;
        }
        let phase = tick % self.period();
        let offset = if phase < dwell {
            0
        } else if phase < dwell + range {
            phase - dwell
        } else if phase < 2 * dwell + range {
            range
        } else {
            range - (phase - 2 * dwell - range)
        };
        offset as u32
    }

    /// Bring the block to its position for `step`. Odd steps are no-ops.
    /// Returns the number of columns the block moved.
    pub fn update(&mut self, field: &mut DensityField, step: u64) -> u32 {
        if step & 1 != 0 {
            return 0;
        }
        let target = self.offset_at(step / 2);
        let mut moved = 0;
        while self.offset != target {
            if self.offset < target {
                self.shift_right(field);
            } else {
                self.shift_left(field);
            }
            moved += 1;
        }
        moved
    }

    fn shift_right(&mut self, field: &mut DensityField) {
        let c = &self.config;
        let left = c.x + self.offset;
        field.sub_column(left, c.y, c.height, c.density);
        field.add_column(left + c.width, c.y, c.height, c.density);
        self.offset += 1;
    }

    fn shift_left(&mut self, field: &mut DensityField) {
        let c = &self.config;
        let left = c.x + self.offset;
        field.sub_column(left + c.width - 1, c.y, c.height, c.density);
        field.add_column(left - 1, c.y, c.height, c.density);
        self.offset -= 1;
    }
}
