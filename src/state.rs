//! On/off state machine with the automatic power-off recovery
//!
//! The machine consumes at most one command per frame. `Off` starts a
//! countdown measured in frames; once it elapses the fire comes back on
//! without any command.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::command::Command;

/// Global on/off state of the fire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    On,
    Off,
}

/// State change produced by the machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// An `On` command switched the fire on
    PoweredOn,
    /// An `Off` command switched the fire off
    PoweredOff,
    /// The power-off countdown elapsed
    Resumed,
}

impl Transition {
    /// Check if the transition lands in [`AnimationState::On`]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::PoweredOn | Self::Resumed)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateMachine {
    state: AnimationState,
    countdown: u32,
    countdown_ticks: u32,
}

impl StateMachine {
    /// Create a machine in the `On` state.
    ///
    /// `countdown_ticks` is the number of frames the fire stays off.
    pub const fn new(countdown_ticks: u32) -> Self {
        Self {
            state: AnimationState::On,
            countdown: countdown_ticks,
            countdown_ticks,
        }
    }

    pub const fn state(&self) -> AnimationState {
        self.state
    }

    /// Frames left before the fire resumes
    pub const fn countdown(&self) -> u32 {
        self.countdown
    }

    pub const fn countdown_ticks(&self) -> u32 {
        self.countdown_ticks
    }

    pub const fn is_on(&self) -> bool {
        matches!(self.state, AnimationState::On)
    }

    /// Apply a command.
    ///
    /// Repeating the current state is a no-op: `Off` while off keeps the
    /// running countdown, `On` while on reports no transition.
    pub fn apply(&mut self, command: Command) -> Option<Transition> {
        match (command, self.state) {
            (Command::Off, AnimationState::On) => {
                self.state = AnimationState::Off;
                self.countdown = self.countdown_ticks;
                Some(Transition::PoweredOff)
            }
            (Command::On, AnimationState::Off) => {
                self.state = AnimationState::On;
                Some(Transition::PoweredOn)
            }
            _ => None,
        }
    }

    /// Count one frame spent off.
    ///
    /// Returns `true` when the countdown reaches zero and the fire is back on.
    pub fn tick_countdown(&mut self) -> bool {
        if self.state != AnimationState::Off {
            return false;
        }
        self.countdown = self.countdown.saturating_sub(1);
        if self.countdown > 0 {
            return false;
        }

        #[cfg(feature = "esp32-log")]
        println!("[fire] power-off elapsed, resuming");

        self.state = AnimationState::On;
        true
    }
}
