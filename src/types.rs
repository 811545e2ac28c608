use core::fmt::Display;

use embedded_hal::digital::PinState;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalDirection {
    Output,
    Input,
}

impl Display for SignalDirection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SignalDirection::Output => f.write_str("output"),
            SignalDirection::Input => f.write_str("input"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnOff {
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Forward,
    Reverse,
}

impl Rotation {
    /// Level to drive on DIR for this rotation.
    pub const fn level(self) -> PinState {
        match (self, config::FORWARD_LEVEL) {
            (Rotation::Forward, level) => level,
            (Rotation::Reverse, PinState::High) => PinState::Low,
            (Rotation::Reverse, PinState::Low) => PinState::High,
        }
    }
}

/// State of the limit switch chain, as read from its input pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitState {
    /// Every switch in the chain is closed.
    Clear,
    /// At least one switch is open, or the chain is broken.
    Triggered,
}

impl LimitState {
    pub const fn from_level(level: PinState) -> Self {
        match (level, config::LIMIT_TRIGGERED_LEVEL) {
            (PinState::High, PinState::High) | (PinState::Low, PinState::Low) => {
                LimitState::Triggered
            }
            _ => LimitState::Clear,
        }
    }
}

impl Display for LimitState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LimitState::Clear => f.write_str("clear"),
            LimitState::Triggered => f.write_str("triggered"),
        }
    }
}
