//! Per-channel read positions into the waveform
//!
//! Every channel plays the same waveform, each from its own starting offset.
//! All cursors advance together, so the phase difference between any two
//! channels stays constant until the set is reset.

use crate::config::ConfigError;
use crate::waveform::Waveform;

/// Read positions of all channels into a waveform of `len` samples
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorSet<const CHANNELS: usize> {
    offsets: [usize; CHANNELS],
    positions: [usize; CHANNELS],
    len: usize,
}

impl<const CHANNELS: usize> CursorSet<CHANNELS> {
    /// Create a cursor set positioned at `offsets`.
    ///
    /// Offsets must be inside the waveform and pairwise distinct.
    pub fn new(offsets: [usize; CHANNELS], len: usize) -> Result<Self, ConfigError> {
        if len == 0 {
            return Err(ConfigError::EmptyWaveform);
        }
        for (channel, &offset) in offsets.iter().enumerate() {
            if offset >= len {
                return Err(ConfigError::OffsetOutOfRange {
                    channel,
                    offset,
                    len,
                });
            }
            if let Some(first) = offsets[..channel].iter().position(|&o| o == offset) {
                return Err(ConfigError::DuplicateOffset {
                    first,
                    second: channel,
                });
            }
        }

        Ok(Self {
            offsets,
            positions: offsets,
            len,
        })
    }

    /// Move every cursor back to its initial offset
    pub fn reset(&mut self) {
        self.positions = self.offsets;
    }

    /// Advance every cursor by one sample, wrapping at the end of the waveform
    pub fn advance(&mut self) {
        for position in &mut self.positions {
            *position += 1;
            if *position >= self.len {
                *position = 0;
            }
        }
    }

    /// Current intensity of `channel`
    pub fn value(&self, waveform: &Waveform<'_>, channel: usize) -> u16 {
        debug_assert_eq!(waveform.len(), self.len);
        waveform.sample(self.positions[channel])
    }

    pub fn position(&self, channel: usize) -> usize {
        self.positions[channel]
    }

    pub const fn positions(&self) -> &[usize; CHANNELS] {
        &self.positions
    }

    pub const fn offsets(&self) -> &[usize; CHANNELS] {
        &self.offsets
    }

    /// Length of the waveform the cursors wrap at
    pub const fn wrap_len(&self) -> usize {
        self.len
    }

    /// Check if the cursors sit at their initial offsets
    pub fn is_at_start(&self) -> bool {
        self.positions == self.offsets
    }
}
