#![no_std]

pub mod channel;
pub mod command;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod frame_scheduler;
pub mod state;
pub mod waveform;

pub use channel::{COMMAND_CHANNEL_SIZE, CommandChannel, CommandReceiver, CommandSender, TrySendError};
pub use command::Command;
pub use config::{
    CHANNEL_COUNT, ConfigError, DEFAULT_FRAME_DURATION, DEFAULT_OFFSETS,
    DEFAULT_POWER_OFF_DURATION, FireConfig,
};
pub use cursor::CursorSet;
pub use engine::{ActuationError, FireEngine, TickOutcome};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use state::{AnimationState, StateMachine, Transition};
pub use waveform::{FIRE_FLICKER_LEN, FIRE_FLICKER_LUT, Waveform};

pub use embassy_time::{Duration, Instant};

/// Abstract actuation backend trait
///
/// Implement this trait to drive the flicker channels on a given platform,
/// usually one PWM channel per flicker element. The fire engine is generic
/// over this trait and never configures the hardware itself.
pub trait ActuationBackend {
    /// Hardware error reported by the backend
    type Error;

    /// Set the raw intensity (duty value) of `channel`
    fn set_channel_intensity(&mut self, channel: usize, intensity: u16) -> Result<(), Self::Error>;
}
