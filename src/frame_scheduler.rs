//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::controller::Controller;
use crate::effect::render_progress;
use crate::filter::{BrightnessFilter, Filter};
use crate::intent::IntentReceiver;
use crate::renderer::Renderer;
use crate::settings::StoredSettings;
use crate::FrameSink;

/// Default target frame rate (90 FPS).
pub const DEFAULT_FPS: u32 = 90;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// Settings the caller should persist now, if any.
    pub save: Option<StoredSettings>,
}

/// Portable frame scheduler that manages timing without async.
///
/// Each tick applies queued intents, advances the phase, renders the active
/// effect and writes it to the sink.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(renderer, controller, queue.receiver(), sink);
///
/// loop {
///     let result = scheduler.tick(Instant::from_micros(now_us()))?;
///     if let Some(stored) = result.save {
///         storage.store(stored);
///     }
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, O: FrameSink, const LEDS: usize, const QUEUE: usize> {
    output: O,
    renderer: Renderer,
    controller: Controller,
    intents: IntentReceiver<'a, QUEUE>,
    frame: [Rgb; LEDS],
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: FrameSink, const LEDS: usize, const QUEUE: usize> FrameScheduler<'a, O, LEDS, QUEUE> {
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (90 FPS) for frame timing.
    pub fn new(
        renderer: Renderer,
        controller: Controller,
        intents: IntentReceiver<'a, QUEUE>,
        output: O,
    ) -> Self {
        Self::with_frame_duration(renderer, controller, intents, output, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer,
        controller: Controller,
        intents: IntentReceiver<'a, QUEUE>,
        output: O,
        frame_duration: Duration,
    ) -> Self {
        Self {
            output,
            renderer,
            controller,
            intents,
            frame: [Rgb::default(); LEDS],
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// The caller is responsible for waiting until `next_deadline` before
    /// calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, O::Error> {
        while let Some(intent) = self.intents.try_receive() {
            self.controller.apply(intent, now);
        }

        let phase = self.controller.advance(now);
        self.renderer
            .render(&self.controller.context(), phase, &mut self.frame);
        self.output.write(&self.frame)?;

        let save = self.controller.take_due_save(now);
        Ok(self.schedule_next(now, save))
    }

    /// Show firmware download progress instead of the active effect
    pub fn show_progress(&mut self, percent: u8, fill: Rgb, background: Rgb) -> Result<(), O::Error> {
        render_progress(&mut self.frame, percent, fill, background);
        BrightnessFilter::new(self.controller.settings().brightness).apply(&mut self.frame);
        self.output.write(&self.frame)
    }

    fn schedule_next(&mut self, now: Instant, save: Option<StoredSettings>) -> FrameResult {
        // Skip the backlog after a stall instead of rendering a catch-up burst
        let max_drift = self.frame_duration * 2;
        if now > self.next_frame + max_drift {
            self.next_frame = now;
        }

        self.next_frame += self.frame_duration;
        let sleep_duration = self.next_frame.saturating_duration_since(now);

        FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
            save,
        }
    }

    /// The last frame written to the sink
    pub fn frame(&self) -> &[Rgb; LEDS] {
        &self.frame
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn output(&self) -> &O {
        &self.output
    }
}
