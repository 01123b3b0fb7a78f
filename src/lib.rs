#![no_std]

pub mod color;
pub mod compositor;
pub mod controller;
pub mod effect;
pub mod filter;
pub mod frame_scheduler;
pub mod intent;
pub mod renderer;
pub mod settings;
pub mod sink;

pub use controller::{Controller, ControllerConfig};
pub use effect::{EFFECT_COUNT, EffectId, EffectSlot};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use intent::{
    ControlIntent, IntentQueue, IntentReceiver, IntentSender, NavigationKey, NavigationMapper,
};
pub use renderer::{RenderContext, RenderError, Renderer, encode_frame};
pub use settings::{Settings, StepRange, StoredSettings};
pub use sink::SmartLedsSink;

pub use color::{PALETTES, Palette, Rgb, hsv_to_rgb, rgb_from_floats};
pub use embassy_time::{Duration, Instant};

/// Pixel count of the reference strip
pub const LED_COUNT: usize = 16;

/// Destination of finished frames
///
/// Implement this trait to support different hardware platforms.
/// Each call receives a complete frame with brightness already applied.
pub trait FrameSink {
    type Error;

    /// Write colors to the LED strip
    fn write(&mut self, frame: &[Rgb]) -> Result<(), Self::Error>;
}
