//! Progress bar shown while a firmware image is downloading

use crate::{
    color::{BLACK, Rgb},
    compositor::project_band,
};

/// Fill the first `percent` of the strip with `fill` and the rest with
/// `background`. The boundary pixel gets both colors by coverage.
///
/// Values above 100 are treated as 100.
pub fn render_progress(leds: &mut [Rgb], percent: u8, fill: Rgb, background: Rgb) {
    leds.fill(BLACK);

    let done = f32::from(percent.min(100)) / 100.0;
    project_band(leds, 0.0, done, fill);
    project_band(leds, done, 1.0 - done, background);
}
