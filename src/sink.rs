//! Adapters from [`FrameSink`] to LED drivers

use smart_leds::SmartLedsWrite;

use crate::{FrameSink, color::Rgb};

/// Frame sink backed by any `smart-leds` driver
pub struct SmartLedsSink<D> {
    driver: D,
}

impl<D> SmartLedsSink<D> {
    pub const fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn into_inner(self) -> D {
        self.driver
    }
}

impl<D> FrameSink for SmartLedsSink<D>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    type Error = D::Error;

    fn write(&mut self, frame: &[Rgb]) -> Result<(), Self::Error> {
        self.driver.write(frame.iter().copied())
    }
}
