//! Global brightness
//!
//! Scales every channel of a finished frame. Applied once per frame, after
//! all compositing.

use super::Filter;
use crate::color::{BLACK, Rgb, scale_color};

/// Brightness multiplier in `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrightnessFilter {
    level: f32,
}

impl BrightnessFilter {
    /// Create a brightness filter, clamping `level` into `[0, 1]`
    pub fn new(level: f32) -> Self {
        Self {
            level: level.clamp(0.0, 1.0),
        }
    }

    pub const fn level(&self) -> f32 {
        self.level
    }
}

impl Default for BrightnessFilter {
    fn default() -> Self {
        Self { level: 1.0 }
    }
}

impl Filter for BrightnessFilter {
    fn apply(&self, frame: &mut [Rgb]) {
        if self.level >= 1.0 {
            return;
        }

        if self.level <= 0.0 {
            frame.fill(BLACK);
            return;
        }

        for pixel in frame.iter_mut() {
            *pixel = scale_color(*pixel, self.level);
        }
    }
}
