//! Color model
//!
//! Floating-point HSV and linear RGB inputs converted to 8-bit channels.
//! Conversions truncate. Components outside `[0, 1]` saturate at 0 or 255.

mod palette;

pub use palette::{PALETTES, Palette, palette_by_name};
use smart_leds::RGB8;

pub type Rgb = RGB8;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Wrap a value into `[0, 1)`, negative inputs included.
#[inline]
pub fn wrap_unit(value: f32) -> f32 {
    let wrapped = value - libm::floorf(value);
    // `-1e-9 - floor(-1e-9)` rounds up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Convert a float channel to 8 bits, truncating.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn channel_from_float(value: f32) -> u8 {
    (value * 255.0) as u8
}

/// Convert linear `[0, 1]` red, green and blue into an 8-bit color.
#[inline]
pub fn rgb_from_floats(r: f32, g: f32, b: f32) -> Rgb {
    Rgb {
        r: channel_from_float(r),
        g: channel_from_float(g),
        b: channel_from_float(b),
    }
}

/// Convert HSV into an 8-bit color.
///
/// Hue has a period of 1.0 and wraps in both directions.
/// Saturation and value are expected in `[0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::many_single_char_names)]
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Rgb {
    let hue = wrap_unit(hue) * 6.0;
    let sector = libm::floorf(hue);
    let f = hue - sector;

    let v = value;
    let p = value * (1.0 - saturation);
    let q = value * (1.0 - f * saturation);
    let t = value * (1.0 - (1.0 - f) * saturation);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        5 => (v, p, q),
        _ => (0.0, 0.0, 0.0),
    };

    rgb_from_floats(r, g, b)
}

/// Multiply every channel by `factor`, truncating.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_lossless
)]
pub fn scale_color(color: Rgb, factor: f32) -> Rgb {
    Rgb {
        r: (color.r as f32 * factor) as u8,
        g: (color.g as f32 * factor) as u8,
        b: (color.b as f32 * factor) as u8,
    }
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}
