//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::ActuationBackend;
use crate::engine::{ActuationError, FireEngine, TickOutcome};

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
    /// What the engine did during this frame.
    pub outcome: TickOutcome,
}

/// Portable frame scheduler that paces the fire engine.
///
/// Deadlines are absolute: each frame is due exactly one frame duration after
/// the previous one, however long the work took, so the waveform keeps a
/// steady mapping to wall-clock time.
///
/// # Usage
///
/// ```ignore
/// let mut scheduler = FrameScheduler::new(engine);
///
/// loop {
///     let result = scheduler.tick(Instant::now())?;
///
///     // Platform-specific sleep
///     sleep_ms(result.sleep_duration.as_millis());
/// }
/// ```
pub struct FrameScheduler<'a, B: ActuationBackend, const CHANNELS: usize, const SIZE: usize> {
    engine: FireEngine<'a, B, CHANNELS, SIZE>,
    next_frame: Option<Instant>,
    frame_duration: Duration,
}

impl<'a, B: ActuationBackend, const CHANNELS: usize, const SIZE: usize>
    FrameScheduler<'a, B, CHANNELS, SIZE>
{
    /// Create a new frame scheduler using the engine's configured frame duration.
    pub fn new(engine: FireEngine<'a, B, CHANNELS, SIZE>) -> Self {
        let frame_duration = engine.config().frame_duration;
        Self {
            engine,
            next_frame: None,
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// This method:
    /// 1. Applies drift correction if we've fallen too far behind
    /// 2. Runs one engine step (command, state, render, advance)
    /// 3. Returns the deadline for the next frame
    ///
    /// An actuation failure is returned as is; the frame timing is left
    /// untouched because the caller is expected to stop.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, ActuationError<B::Error>> {
        // The first frame starts the schedule. After a stall longer than two
        // frames the schedule restarts at `now` instead of bursting to catch up.
        let max_drift = self.frame_duration * 2;
        let current = match self.next_frame {
            Some(deadline) if now <= deadline + max_drift => deadline,
            _ => now,
        };

        let outcome = self.engine.step()?;

        let next_deadline = current + self.frame_duration;
        self.next_frame = Some(next_deadline);

        let sleep_duration = if next_deadline > now {
            next_deadline - now
        } else {
            Duration::from_ticks(0)
        };

        Ok(FrameResult {
            next_deadline,
            sleep_duration,
            outcome,
        })
    }

    pub const fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    /// Get a reference to the engine.
    pub const fn engine(&self) -> &FireEngine<'a, B, CHANNELS, SIZE> {
        &self.engine
    }

    /// Get a mutable reference to the engine.
    pub fn engine_mut(&mut self) -> &mut FireEngine<'a, B, CHANNELS, SIZE> {
        &mut self.engine
    }
}
