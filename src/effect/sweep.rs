//! Knight-rider style sweep
//!
//! A soft spot bounces from one end of the strip to the other once per
//! phase unit.

use super::Effect;
use crate::color::{Rgb, rgb_from_floats, wrap_unit};

/// Falloff of the spot: brightness is `1 - FALLOFF * distance²`
const FALLOFF: f32 = 4.5;
/// Green share of the cyan-ish spot color
const GREEN_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct SweepEffect;

impl SweepEffect {
    /// Ping-pong position in `[0, 1]`, rising on the first half of a cycle
    pub fn position(phase: f32) -> f32 {
        let t = wrap_unit(phase);
        if t < 0.5 { t * 2.0 } else { 2.0 - t * 2.0 }
    }
}

impl Effect for SweepEffect {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self, phase: f32, leds: &mut [Rgb]) {
        let pos = Self::position(phase);
        let span = leds.len().saturating_sub(1).max(1) as f32;

        for (i, led) in leds.iter_mut().enumerate() {
            let dist = pos - i as f32 / span;
            let a = (1.0 - FALLOFF * dist * dist).max(0.0);
            *led = rgb_from_floats(0.0, a * GREEN_RATIO, a);
        }
    }
}
