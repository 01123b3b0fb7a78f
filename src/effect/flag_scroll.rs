//! Flag scroller
//!
//! Shows one flag per phase unit. During the last quarter of each unit the
//! flag slides off the strip while the next one in the catalog slides in.

use super::Effect;
use crate::{
    color::{BLACK, Palette, Rgb, wrap_unit},
    compositor::project_flag,
};

/// Fraction of a phase unit during which the flag holds still
const HOLD: f32 = 0.75;

#[derive(Debug, Clone, Copy)]
pub struct FlagScrollEffect {
    palettes: &'static [Palette],
}

impl FlagScrollEffect {
    pub const fn new(palettes: &'static [Palette]) -> Self {
        Self { palettes }
    }

    /// Catalog indices of the current and the upcoming flag
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap
    )]
    pub fn flags_at(&self, phase: f32) -> (usize, usize) {
        let count = self.palettes.len().max(1);
        let unit = libm::floorf(phase) as i64;
        let current = unit.rem_euclid(count as i64) as usize;
        (current, (current + 1) % count)
    }

    /// Offset of the current flag, zero while holding and down to `-1`
    /// at the end of the unit
    pub fn scroll_offset(phase: f32) -> f32 {
        ((HOLD - wrap_unit(phase)) / (1.0 - HOLD)).min(0.0)
    }
}

impl Effect for FlagScrollEffect {
    fn render(&self, phase: f32, leds: &mut [Rgb]) {
        leds.fill(BLACK);
        if self.palettes.is_empty() {
            return;
        }

        let (current, next) = self.flags_at(phase);
        let offset = Self::scroll_offset(phase);
        project_flag(leds, &self.palettes[current], offset);
        if offset < 0.0 {
            project_flag(leds, &self.palettes[next], offset + 1.0);
        }
    }
}
