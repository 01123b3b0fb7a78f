use core::fmt;

use crate::color::{Palette, Rgb};
use crate::effect::{EFFECT_COUNT, EffectId};
use crate::filter::{BrightnessFilter, Filter};

/// Errors reported by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderError {
    /// Requested effect index is not below [`EFFECT_COUNT`]
    InvalidEffectIndex(usize),
    /// Output byte buffer cannot hold the encoded frame
    BufferTooSmall { needed: usize, available: usize },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEffectIndex(index) => {
                write!(f, "effect index {index} out of range (0..{EFFECT_COUNT})")
            }
            Self::BufferTooSmall { needed, available } => {
                write!(f, "frame needs {needed} bytes, buffer holds {available}")
            }
        }
    }
}

impl core::error::Error for RenderError {}

/// Per-frame state owned by the control loop
///
/// Changed only between frames, never while a frame renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderContext {
    pub effect: EffectId,
    pub brightness: f32,
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            effect: EffectId::default(),
            brightness: 1.0,
        }
    }
}

/// Renders effects into a caller-owned frame
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    palettes: &'static [Palette],
}

impl Renderer {
    pub const fn new(palettes: &'static [Palette]) -> Self {
        Self { palettes }
    }

    pub const fn effect_count(&self) -> usize {
        EFFECT_COUNT
    }

    pub const fn palettes(&self) -> &'static [Palette] {
        self.palettes
    }

    /// Render the context's effect for `phase` into `frame`
    ///
    /// The effect overwrites the whole frame, then brightness is applied once.
    pub fn render(&self, ctx: &RenderContext, phase: f32, frame: &mut [Rgb]) {
        ctx.effect.to_slot(self.palettes).render(phase, frame);
        BrightnessFilter::new(ctx.brightness).apply(frame);
    }

    /// Render the effect at `index` for `phase`
    pub fn render_effect(
        &self,
        index: usize,
        phase: f32,
        brightness: f32,
        frame: &mut [Rgb],
    ) -> Result<(), RenderError> {
        let effect = EffectId::from_index(index).ok_or(RenderError::InvalidEffectIndex(index))?;
        self.render(&RenderContext { effect, brightness }, phase, frame);
        Ok(())
    }
}

/// Write `frame` as `[r0, g0, b0, r1, g1, b1, ...]` into `out`
///
/// Returns the number of bytes written.
pub fn encode_frame(frame: &[Rgb], out: &mut [u8]) -> Result<usize, RenderError> {
    let needed = frame.len() * 3;
    if out.len() < needed {
        return Err(RenderError::BufferTooSmall {
            needed,
            available: out.len(),
        });
    }

    for (pixel, bytes) in frame.iter().zip(out.chunks_exact_mut(3)) {
        bytes[0] = pixel.r;
        bytes[1] = pixel.g;
        bytes[2] = pixel.b;
    }
    Ok(needed)
}
