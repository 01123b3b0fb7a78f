//! Effect system with a closed set of variants
//!
//! Every effect is a pure function of the phase: rendering the same phase
//! twice yields the same frame. Effects write raw colors; brightness is
//! applied afterwards by the renderer.

mod flag_scroll;
mod progress;
mod single_hue;
mod spectrum;
mod sweep;

pub use flag_scroll::FlagScrollEffect;
pub use progress::render_progress;
pub use single_hue::SingleHueEffect;
pub use spectrum::SpectrumEffect;
pub use sweep::SweepEffect;

use crate::color::{Palette, Rgb};

const EFFECT_NAME_SPECTRUM: &str = "spectrum";
const EFFECT_NAME_SINGLE_HUE: &str = "single_hue";
const EFFECT_NAME_SWEEP: &str = "sweep";
const EFFECT_NAME_FLAG_SCROLL: &str = "flag_scroll";

const EFFECT_ID_SPECTRUM: u8 = 0;
const EFFECT_ID_SINGLE_HUE: u8 = 1;
const EFFECT_ID_SWEEP: u8 = 2;
const EFFECT_ID_FLAG_SCROLL: u8 = 3;

/// Number of selectable effects
pub const EFFECT_COUNT: usize = 4;

pub trait Effect {
    /// Render a single frame for `phase`
    ///
    /// Every LED in `leds` must be overwritten; the buffer still holds the
    /// previous frame on entry.
    fn render(&self, phase: f32, leds: &mut [Rgb]);
}

/// Known effect ids, in selection order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum EffectId {
    #[default]
    Spectrum = EFFECT_ID_SPECTRUM,
    SingleHue = EFFECT_ID_SINGLE_HUE,
    Sweep = EFFECT_ID_SWEEP,
    FlagScroll = EFFECT_ID_FLAG_SCROLL,
}

impl EffectId {
    pub const ALL: [Self; EFFECT_COUNT] =
        [Self::Spectrum, Self::SingleHue, Self::Sweep, Self::FlagScroll];

    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_SPECTRUM => Self::Spectrum,
            EFFECT_ID_SINGLE_HUE => Self::SingleHue,
            EFFECT_ID_SWEEP => Self::Sweep,
            EFFECT_ID_FLAG_SCROLL => Self::FlagScroll,
            _ => return None,
        })
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Next effect in selection order, wrapping to the first
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Spectrum => Self::SingleHue,
            Self::SingleHue => Self::Sweep,
            Self::Sweep => Self::FlagScroll,
            Self::FlagScroll => Self::Spectrum,
        }
    }

    pub fn to_slot(self, palettes: &'static [Palette]) -> EffectSlot {
        match self {
            Self::Spectrum => EffectSlot::Spectrum(SpectrumEffect),
            Self::SingleHue => EffectSlot::SingleHue(SingleHueEffect),
            Self::Sweep => EffectSlot::Sweep(SweepEffect),
            Self::FlagScroll => EffectSlot::FlagScroll(FlagScrollEffect::new(palettes)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spectrum => EFFECT_NAME_SPECTRUM,
            Self::SingleHue => EFFECT_NAME_SINGLE_HUE,
            Self::Sweep => EFFECT_NAME_SWEEP,
            Self::FlagScroll => EFFECT_NAME_FLAG_SCROLL,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_SPECTRUM => Some(Self::Spectrum),
            EFFECT_NAME_SINGLE_HUE => Some(Self::SingleHue),
            EFFECT_NAME_SWEEP => Some(Self::Sweep),
            EFFECT_NAME_FLAG_SCROLL => Some(Self::FlagScroll),
            _ => None,
        }
    }
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy)]
pub enum EffectSlot {
    /// Rainbow gradient along the strip
    Spectrum(SpectrumEffect),
    /// One hue for every LED
    SingleHue(SingleHueEffect),
    /// Bouncing cyan spot
    Sweep(SweepEffect),
    /// Scrolling striped flags
    FlagScroll(FlagScrollEffect),
}

impl EffectSlot {
    /// Render the current effect
    pub fn render(&self, phase: f32, leds: &mut [Rgb]) {
        match self {
            Self::Spectrum(effect) => effect.render(phase, leds),
            Self::SingleHue(effect) => effect.render(phase, leds),
            Self::Sweep(effect) => effect.render(phase, leds),
            Self::FlagScroll(effect) => effect.render(phase, leds),
        }
    }

    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::Spectrum(_) => EffectId::Spectrum,
            Self::SingleHue(_) => EffectId::SingleHue,
            Self::Sweep(_) => EffectId::Sweep,
            Self::FlagScroll(_) => EffectId::FlagScroll,
        }
    }
}
