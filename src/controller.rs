//! Control loop state
//!
//! Owns the user-adjustable settings and the animation phase. Intents are
//! applied between frames; a settings save is requested once the values
//! stop changing for [`ControllerConfig::save_delay`].

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::color::PALETTES;
use crate::effect::EffectId;
use crate::intent::ControlIntent;
use crate::renderer::RenderContext;
use crate::settings::{BRIGHTNESS_RANGE, SPEED_RANGE, Settings, StepRange, StoredSettings};

/// Delay between the last settings change and the save request
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

const MICROS_PER_SECOND: f32 = 1_000_000.0;

/// Configuration for the controller
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub speed: StepRange,
    pub brightness: StepRange,
    pub save_delay: Duration,
    /// Phase is kept modulo this period; a multiple of every effect's period
    pub phase_period: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            speed: SPEED_RANGE,
            brightness: BRIGHTNESS_RANGE,
            save_delay: DEFAULT_SAVE_DELAY,
            phase_period: PALETTES.len(),
        }
    }
}

/// Settings, phase and pending save of the running device
#[derive(Debug, Clone)]
pub struct Controller {
    config: ControllerConfig,
    settings: Settings,
    phase: f32,
    last_tick: Option<Instant>,
    save_at: Option<Instant>,
}

impl Controller {
    pub fn new(config: &ControllerConfig, settings: Settings) -> Self {
        Self {
            config: *config,
            settings,
            phase: 0.0,
            last_tick: None,
            save_at: None,
        }
    }

    /// Create a controller from stored settings
    pub fn restore(config: &ControllerConfig, stored: &StoredSettings) -> Self {
        let settings = Settings::restore(stored, &config.speed, &config.brightness);
        #[cfg(feature = "esp32-log")]
        println!(
            "[Controller.restore] effect {} speed {} brightness {}",
            settings.effect.as_str(),
            settings.speed,
            settings.brightness
        );
        Self::new(config, settings)
    }

    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    pub const fn phase(&self) -> f32 {
        self.phase
    }

    pub const fn effect(&self) -> EffectId {
        self.settings.effect
    }

    /// Context for rendering the next frame
    pub const fn context(&self) -> RenderContext {
        RenderContext {
            effect: self.settings.effect,
            brightness: self.settings.brightness,
        }
    }

    /// Apply an intent and schedule a settings save
    pub fn apply(&mut self, intent: ControlIntent, now: Instant) {
        let settings = &mut self.settings;
        match intent {
            ControlIntent::NextEffect => settings.effect = settings.effect.next(),
            ControlIntent::SetEffect(effect) => settings.effect = effect,
            ControlIntent::SpeedUp => settings.speed = self.config.speed.step_up(settings.speed),
            ControlIntent::SpeedDown => {
                settings.speed = self.config.speed.step_down(settings.speed);
            }
            ControlIntent::BrightnessUp => {
                settings.brightness = self.config.brightness.step_up(settings.brightness);
            }
            ControlIntent::BrightnessDown => {
                settings.brightness = self.config.brightness.step_down(settings.brightness);
            }
        }
        #[cfg(feature = "esp32-log")]
        println!(
            "[Controller.apply] {:?}: effect {} speed {} brightness {}",
            intent,
            self.settings.effect.as_str(),
            self.settings.speed,
            self.settings.brightness
        );
        self.save_at = Some(now + self.config.save_delay);
    }

    /// Advance the phase by `speed × elapsed` and return it
    ///
    /// The first call only records `now`.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, now: Instant) -> f32 {
        if let Some(last) = self.last_tick {
            let elapsed = now.saturating_duration_since(last);
            self.phase += self.settings.speed * (elapsed.as_micros() as f32 / MICROS_PER_SECOND);

            let period = self.config.phase_period.max(1) as f32;
            if self.phase >= period {
                self.phase %= period;
            }
        }
        self.last_tick = Some(now);
        self.phase
    }

    /// Settings to persist, once the save delay has passed
    ///
    /// Returns `Some` exactly once per burst of changes.
    pub fn take_due_save(&mut self, now: Instant) -> Option<StoredSettings> {
        let due = self.save_at?;
        if now < due {
            return None;
        }
        self.save_at = None;
        Some(
            self.settings
                .to_stored(&self.config.speed, &self.config.brightness),
        )
    }

    pub const fn has_pending_save(&self) -> bool {
        self.save_at.is_some()
    }
}
