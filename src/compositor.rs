//! Band compositor
//!
//! Projects color bands, given as fractions of the strip width, onto a frame.
//! A pixel `i` covers `[i, i + 1)`; each band adds its color weighted by how
//! much of that interval it overlaps. Accumulation is additive, so two flags
//! can be layered in a single cleared frame.

use crate::color::{Palette, Rgb};

/// A band converted to pixel space and clamped to the frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpan {
    start: f32,
    end: f32,
}

impl BandSpan {
    /// Map a band at `start` of width `size` (both in strip widths) onto
    /// `pixel_count` pixels.
    ///
    /// Returns `None` when nothing of the band lands on the strip.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(pixel_count: usize, start: f32, size: f32) -> Option<Self> {
        let count = pixel_count as f32;
        let start_px = start * count;
        let end_px = start_px + size * count;

        let start = start_px.max(0.0);
        let end = end_px.min(count);
        if start >= end {
            return None;
        }
        Some(Self { start, end })
    }

    pub const fn start(&self) -> f32 {
        self.start
    }

    pub const fn end(&self) -> f32 {
        self.end
    }

    /// Pixels touched by the span along with their covered fraction
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn coverage(&self) -> impl Iterator<Item = (usize, f32)> + '_ {
        let first = libm::floorf(self.start) as usize;
        let last = libm::ceilf(self.end) as usize;
        (first..last).filter_map(move |index| {
            let lo = index as f32;
            let cov = self.end.min(lo + 1.0) - self.start.max(lo);
            (cov > 0.0).then_some((index, cov))
        })
    }
}

/// Add `color` weighted by coverage to the pixels under one band.
///
/// Channels saturate at 255. The frame is not cleared first.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn project_band(frame: &mut [Rgb], start: f32, size: f32, color: Rgb) {
    let Some(span) = BandSpan::new(frame.len(), start, size) else {
        return;
    };

    for (index, cov) in span.coverage() {
        let Some(pixel) = frame.get_mut(index) else {
            break;
        };
        pixel.r = pixel.r.saturating_add((color.r as f32 * cov) as u8);
        pixel.g = pixel.g.saturating_add((color.g as f32 * cov) as u8);
        pixel.b = pixel.b.saturating_add((color.b as f32 * cov) as u8);
    }
}

/// Lay every band of `palette` across one strip width, shifted by `offset`.
///
/// Bands pushed past either end of the strip contribute nothing.
#[allow(clippy::cast_precision_loss)]
pub fn project_flag(frame: &mut [Rgb], palette: &Palette, offset: f32) {
    if palette.bands.is_empty() {
        return;
    }

    let band_size = 1.0 / palette.bands_len() as f32;
    for (i, &band) in palette.bands.iter().enumerate() {
        project_band(frame, offset + i as f32 * band_size, band_size, band);
    }
}
