//! Whole strip cycling through the color wheel in unison

use super::Effect;
use crate::color::{Rgb, hsv_to_rgb};

#[derive(Debug, Clone, Copy, Default)]
pub struct SingleHueEffect;

impl Effect for SingleHueEffect {
    fn render(&self, phase: f32, leds: &mut [Rgb]) {
        leds.fill(hsv_to_rgb(phase, 1.0, 1.0));
    }
}
