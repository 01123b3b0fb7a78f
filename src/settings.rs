//! Persisted settings and their step quantization
//!
//! Speed and brightness are stored as integer step counts over a
//! [`StepRange`]. Storing and loading the values is left to the caller.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::effect::EffectId;

/// Added before truncating to a step count so values sitting exactly on a
/// step do not fall to the one below
const STEP_EPSILON: f32 = 0.001;

/// A bounded value adjusted in fixed increments
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRange {
    pub min: f32,
    pub increment: f32,
    pub max: f32,
}

/// Animation speed in phase units per second
pub const SPEED_RANGE: StepRange = StepRange {
    min: 0.1,
    increment: 0.05,
    max: 2.0,
};
pub const DEFAULT_SPEED: f32 = 0.25;

pub const BRIGHTNESS_RANGE: StepRange = StepRange {
    min: 0.1,
    increment: 0.1,
    max: 1.0,
};
pub const DEFAULT_BRIGHTNESS: f32 = 1.0;

impl StepRange {
    /// Value for a stored step count, capped at `max`
    #[allow(clippy::cast_precision_loss)]
    pub fn from_steps(&self, steps: u32) -> f32 {
        (steps as f32 * self.increment + self.min).min(self.max)
    }

    /// Step count to store for `value`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_steps(&self, value: f32) -> u32 {
        ((value - self.min + STEP_EPSILON) / self.increment) as u32
    }

    #[must_use]
    pub fn step_up(&self, value: f32) -> f32 {
        (value + self.increment).min(self.max)
    }

    #[must_use]
    pub fn step_down(&self, value: f32) -> f32 {
        (value - self.increment).max(self.min)
    }
}

/// Settings as they are kept in non-volatile storage
///
/// `None` means the value was never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoredSettings {
    pub effect: u32,
    pub speed_steps: Option<u32>,
    pub brightness_steps: Option<u32>,
}

/// User-adjustable parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub effect: EffectId,
    pub speed: f32,
    pub brightness: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            effect: EffectId::default(),
            speed: DEFAULT_SPEED,
            brightness: DEFAULT_BRIGHTNESS,
        }
    }
}

impl Settings {
    /// Rebuild settings from storage
    ///
    /// An unknown effect index falls back to the first effect. Missing values
    /// keep their defaults.
    pub fn restore(stored: &StoredSettings, speed: &StepRange, brightness: &StepRange) -> Self {
        let defaults = Self::default();
        let effect = usize::try_from(stored.effect)
            .ok()
            .and_then(EffectId::from_index)
            .unwrap_or_else(|| {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[Settings.restore] stored effect {} is unknown, using {}",
                    stored.effect,
                    defaults.effect.as_str()
                );
                defaults.effect
            });

        Self {
            effect,
            speed: stored
                .speed_steps
                .map_or(defaults.speed, |steps| speed.from_steps(steps)),
            brightness: stored
                .brightness_steps
                .map_or(defaults.brightness, |steps| brightness.from_steps(steps)),
        }
    }

    /// Quantize settings for storage
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_stored(&self, speed: &StepRange, brightness: &StepRange) -> StoredSettings {
        StoredSettings {
            effect: self.effect.index() as u32,
            speed_steps: Some(speed.to_steps(self.speed)),
            brightness_steps: Some(brightness.to_steps(self.brightness)),
        }
    }
}
