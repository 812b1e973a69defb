//! Waveform tables played by the flicker channels
//!
//! A waveform is an immutable cycle of raw intensity samples. The engine
//! never interprets the values, it only indexes into them.

mod lut;

pub use lut::{FIRE_FLICKER_LEN, FIRE_FLICKER_LUT};

/// Read-only view over one cycle of intensity samples
#[derive(Debug, Clone, Copy)]
pub struct Waveform<'a> {
    samples: &'a [u16],
}

impl<'a> Waveform<'a> {
    pub const fn new(samples: &'a [u16]) -> Self {
        Self { samples }
    }

    /// The compiled-in fire flicker table
    pub const fn fire() -> Waveform<'static> {
        Waveform::new(&FIRE_FLICKER_LUT)
    }

    pub const fn len(&self) -> usize {
        self.samples.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at `index`.
    ///
    /// Panics if `index` is out of range: cursors wrap on advance, so an
    /// out-of-range index means a corrupted cursor.
    pub fn sample(&self, index: usize) -> u16 {
        self.samples[index]
    }

    pub const fn samples(&self) -> &'a [u16] {
        self.samples
    }
}

impl Default for Waveform<'static> {
    fn default() -> Self {
        Self::fire()
    }
}
