use embassy_time::Duration;

/// Number of flicker channels on the fixture
pub const CHANNEL_COUNT: usize = 5;

/// Default frame period (about 30 FPS).
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(33);

/// Default time the fire stays dark after an `Off` command.
pub const DEFAULT_POWER_OFF_DURATION: Duration = Duration::from_secs(60);

/// Default waveform offsets, one sample apart so no two channels match.
pub const DEFAULT_OFFSETS: [usize; CHANNEL_COUNT] = [4, 3, 2, 1, 0];

/// Configuration for the fire engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FireConfig<const CHANNELS: usize> {
    /// Period of one frame
    pub frame_duration: Duration,
    /// How long the fire stays off before resuming on its own
    pub power_off_duration: Duration,
    /// Initial waveform position of each channel
    pub offsets: [usize; CHANNELS],
}

impl<const CHANNELS: usize> FireConfig<CHANNELS> {
    /// Number of frames the fire stays off.
    ///
    /// Never less than one, so a power-off always lasts at least a frame.
    pub fn countdown_ticks(&self) -> u32 {
        let frame_ms = self.frame_duration.as_millis().max(1);
        let ticks = self.power_off_duration.as_millis() / frame_ms;
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for FireConfig<CHANNEL_COUNT> {
    fn default() -> Self {
        Self {
            frame_duration: DEFAULT_FRAME_DURATION,
            power_off_duration: DEFAULT_POWER_OFF_DURATION,
            offsets: DEFAULT_OFFSETS,
        }
    }
}

/// Error returned when the engine is built from an invalid configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The waveform has no samples
    EmptyWaveform,
    /// A channel offset points past the end of the waveform
    OffsetOutOfRange { channel: usize, offset: usize, len: usize },
    /// Two channels share the same offset and would flicker in phase
    DuplicateOffset { first: usize, second: usize },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyWaveform => f.write_str("waveform is empty"),
            Self::OffsetOutOfRange {
                channel,
                offset,
                len,
            } => write!(
                f,
                "channel {channel} offset {offset} is out of range for waveform of {len} samples"
            ),
            Self::DuplicateOffset { first, second } => {
                write!(f, "channels {first} and {second} share the same offset")
            }
        }
    }
}
