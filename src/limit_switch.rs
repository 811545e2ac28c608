use embedded_hal::digital::{InputPin, PinState};

use crate::types::LimitState;

/// The limit switch chain input. See [`LIMIT_SWITCH_PIN`] for the wiring.
///
/// Reads are raw: no debouncing.
///
/// [`LIMIT_SWITCH_PIN`]: crate::pinouts::LIMIT_SWITCH_PIN
pub struct LimitSwitch<L> {
    pin: L,
}

impl<L: InputPin> LimitSwitch<L> {
    /// The pin must already be an input with its pull-up enabled.
    pub fn new(pin: L) -> Self {
        LimitSwitch { pin }
    }

    pub fn state(&mut self) -> Result<LimitState, L::Error> {
        let level = PinState::from(self.pin.is_high()?);
        Ok(LimitState::from_level(level))
    }

    pub fn is_triggered(&mut self) -> Result<bool, L::Error> {
        Ok(self.state()? == LimitState::Triggered)
    }

    /// Access to the underlying pin, e.g. to await an edge.
    pub fn pin_mut(&mut self) -> &mut L {
        &mut self.pin
    }

    pub fn release(self) -> L {
        self.pin
    }
}
