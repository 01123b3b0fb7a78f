use crate::color::Rgb;

mod brightness;

pub use brightness::BrightnessFilter;

pub trait Filter {
    /// Apply the filter to a frame
    fn apply(&self, frame: &mut [Rgb]);
}
