//! Outputs to the step/servo driver: PUL, DIR and ENA.
//!
//! Step pulse timing belongs to the motion code. This only owns the pins and
//! keeps track of what level each one was last driven to.

use embedded_hal::digital::{OutputPin, PinState};

use crate::{
    config,
    types::{OnOff, Rotation},
};

const fn inverse(level: PinState) -> PinState {
    match level {
        PinState::High => PinState::Low,
        PinState::Low => PinState::High,
    }
}

/// ENA level that keeps the driver stage off.
pub const ENABLE_INACTIVE_LEVEL: PinState = inverse(config::ENABLE_ACTIVE_LEVEL);

pub struct DriverOutputs<S, D, E> {
    step: S,
    direction: D,
    enable: E,
    enabled: OnOff,
    rotation: Rotation,
}

impl<S, D, E, Err> DriverOutputs<S, D, E>
where
    S: OutputPin<Error = Err>,
    D: OutputPin<Error = Err>,
    E: OutputPin<Error = Err>,
{
    /// Takes the three driver outputs and puts them in a safe state: step low,
    /// direction forward, driver disabled.
    pub fn new(mut step: S, mut direction: D, mut enable: E) -> Result<Self, Err> {
        step.set_low()?;
        direction.set_state(Rotation::Forward.level())?;
        enable.set_state(ENABLE_INACTIVE_LEVEL)?;

        Ok(DriverOutputs {
            step,
            direction,
            enable,
            enabled: OnOff::Off,
            rotation: Rotation::Forward,
        })
    }

    pub fn set_enabled(&mut self, value: OnOff) -> Result<(), Err> {
        match value {
            OnOff::On => self.enable.set_state(config::ENABLE_ACTIVE_LEVEL)?,
            OnOff::Off => self.enable.set_state(ENABLE_INACTIVE_LEVEL)?,
        }
        self.enabled = value;
        Ok(())
    }

    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<(), Err> {
        self.direction.set_state(rotation.level())?;
        self.rotation = rotation;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled == OnOff::On
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// The PUL output, for whatever generates the step pulses.
    pub fn step_pin(&mut self) -> &mut S {
        &mut self.step
    }

    /// Gives the pins back as they are. Does not disable the driver.
    pub fn release(self) -> (S, D, E) {
        (self.step, self.direction, self.enable)
    }
}
