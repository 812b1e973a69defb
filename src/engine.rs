#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::ActuationBackend;
use crate::channel::CommandReceiver;
use crate::command::Command;
use crate::config::{ConfigError, FireConfig};
use crate::cursor::CursorSet;
use crate::state::{AnimationState, StateMachine, Transition};
use crate::waveform::Waveform;

/// Error returned when the actuation backend fails to set a channel.
///
/// There is no recovery from a hardware fault, callers should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuationError<E> {
    pub channel: usize,
    pub intensity: u16,
    pub error: E,
}

impl<E: core::fmt::Debug> core::fmt::Display for ActuationError<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "failed to set channel {} to {}: {:?}",
            self.channel, self.intensity, self.error
        )
    }
}

/// What a single frame did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickOutcome {
    /// Command taken from the channel, [`Command::None`] if it was empty
    pub command: Command,
    /// State change made during the frame
    pub transition: Option<Transition>,
    /// Whether waveform values were written to the backend
    pub rendered: bool,
}

/// Fire engine - owns the flicker state and drives the backend
///
/// One call to [`FireEngine::step`] is one frame:
/// 1. Take at most one command from the channel (never blocks)
/// 2. Apply it to the state machine
/// 3. Render the cursor values when on, count down when off
/// 4. Advance the cursors
pub struct FireEngine<'a, B: ActuationBackend, const CHANNELS: usize, const SIZE: usize> {
    // External dependencies and configuration
    backend: B,
    commands: CommandReceiver<'a, SIZE>,
    waveform: Waveform<'a>,
    config: FireConfig<CHANNELS>,

    // Internal state
    cursors: CursorSet<CHANNELS>,
    machine: StateMachine,
}

impl<'a, B: ActuationBackend, const CHANNELS: usize, const SIZE: usize>
    FireEngine<'a, B, CHANNELS, SIZE>
{
    /// Create a new engine in the `On` state with cursors at their offsets
    pub fn new(
        backend: B,
        commands: CommandReceiver<'a, SIZE>,
        waveform: Waveform<'a>,
        config: &FireConfig<CHANNELS>,
    ) -> Result<Self, ConfigError> {
        let cursors = CursorSet::new(config.offsets, waveform.len())?;
        Ok(Self {
            backend,
            commands,
            waveform,
            config: *config,
            cursors,
            machine: StateMachine::new(config.countdown_ticks()),
        })
    }

    /// Run one frame
    pub fn step(&mut self) -> Result<TickOutcome, ActuationError<B::Error>> {
        let command = self.commands.next_command();

        #[cfg(feature = "esp32-log")]
        if command.is_some() {
            println!("[fire] command {}", command.as_str());
        }

        let mut transition = self.machine.apply(command);
        match transition {
            Some(Transition::PoweredOff) => Self::write_channels(&mut self.backend, |_| 0)?,
            Some(Transition::PoweredOn) => self.cursors.reset(),
            _ => {}
        }

        let mut rendered = false;
        match self.machine.state() {
            AnimationState::On => {
                self.render()?;
                rendered = true;
            }
            // The frame that switched off already blanked the outputs
            AnimationState::Off if transition.is_some() => {}
            AnimationState::Off => {
                if self.machine.tick_countdown() {
                    transition = Some(Transition::Resumed);
                }
            }
        }

        // A resumed fire starts the next frame from the initial offsets
        if transition == Some(Transition::Resumed) {
            self.cursors.reset();
        } else {
            self.cursors.advance();
        }

        Ok(TickOutcome {
            command,
            transition,
            rendered,
        })
    }

    fn render(&mut self) -> Result<(), ActuationError<B::Error>> {
        let waveform = self.waveform;
        let cursors = &self.cursors;
        Self::write_channels(&mut self.backend, |channel| {
            cursors.value(&waveform, channel)
        })
    }

    fn write_channels(
        backend: &mut B,
        intensity: impl Fn(usize) -> u16,
    ) -> Result<(), ActuationError<B::Error>> {
        for channel in 0..CHANNELS {
            let intensity = intensity(channel);
            backend
                .set_channel_intensity(channel, intensity)
                .map_err(|error| ActuationError {
                    channel,
                    intensity,
                    error,
                })?;
        }
        Ok(())
    }

    pub const fn state(&self) -> AnimationState {
        self.machine.state()
    }

    /// Frames left before an off fire resumes
    pub const fn countdown(&self) -> u32 {
        self.machine.countdown()
    }

    pub const fn cursors(&self) -> &CursorSet<CHANNELS> {
        &self.cursors
    }

    pub const fn config(&self) -> &FireConfig<CHANNELS> {
        &self.config
    }

    pub const fn waveform(&self) -> &Waveform<'a> {
        &self.waveform
    }

    pub const fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
