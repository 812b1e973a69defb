//! Commands accepted by the fire engine
//!
//! Commands are idempotent state setters, so dropping one when the
//! channel is full is harmless: the producer can simply send it again.

const COMMAND_NAME_NONE: &str = "none";
const COMMAND_NAME_ON: &str = "on";
const COMMAND_NAME_OFF: &str = "off";

const COMMAND_ID_NONE: u8 = 0;
const COMMAND_ID_ON: u8 = 1;
const COMMAND_ID_OFF: u8 = 2;

/// Command decoded by the producer and handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Command {
    /// No command pending. Never triggers a transition.
    #[default]
    None = COMMAND_ID_NONE,
    /// Switch the fire on, restarting the flicker from its initial phases.
    On = COMMAND_ID_ON,
    /// Switch the fire off. It comes back on its own after the power-off duration.
    Off = COMMAND_ID_OFF,
}

impl Command {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            COMMAND_ID_NONE => Self::None,
            COMMAND_ID_ON => Self::On,
            COMMAND_ID_OFF => Self::Off,
            _ => return None,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => COMMAND_NAME_NONE,
            Self::On => COMMAND_NAME_ON,
            Self::Off => COMMAND_NAME_OFF,
        }
    }

    /// Parse a command name, ignoring case and surrounding whitespace
    pub fn parse_from_str(value: &str) -> Option<Self> {
        let value = value.trim();
        [Self::None, Self::On, Self::Off]
            .into_iter()
            .find(|command| command.as_str().eq_ignore_ascii_case(value))
    }

    /// Check if the command asks for a state change
    pub const fn is_some(self) -> bool {
        !matches!(self, Self::None)
    }
}
