//! Hue spectrum spread along the strip

use super::Effect;
use crate::color::{Rgb, hsv_to_rgb};

/// Full color wheel across the strip, rotated by the phase
#[derive(Debug, Clone, Copy, Default)]
pub struct SpectrumEffect;

impl Effect for SpectrumEffect {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self, phase: f32, leds: &mut [Rgb]) {
        let count = leds.len() as f32;
        for (i, led) in leds.iter_mut().enumerate() {
            *led = hsv_to_rgb(phase + i as f32 / count, 1.0, 1.0);
        }
    }
}
