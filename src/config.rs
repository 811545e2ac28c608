//! Build-time board configuration.
//!
//! Nothing here is read at runtime; change a value and rebuild.

use embedded_hal::digital::PinState;

use crate::chip::{self, GpioMap};

/// The chip the pinout is checked against.
pub const CHIP: GpioMap = chip::ESP32;

/// ENA level that powers the driver stage. Opto-isolated ENA inputs (iHSV57 and
/// most stepper drivers) release the motor while their LED is lit, so the
/// stage is active with the pin low.
pub const ENABLE_ACTIVE_LEVEL: PinState = PinState::Low;

/// DIR level for forward rotation.
pub const FORWARD_LEVEL: PinState = PinState::High;

/// Level the limit input reads when any switch in the chain is open.
pub const LIMIT_TRIGGERED_LEVEL: PinState = PinState::High;

/// In-memory log size, in characters.
pub const MEMLOG_CAPACITY: usize = 480;

pub const BANNER: &str = const_format::formatcp!(
    "\r\n{} {} ({})\r\n",
    env!("CARGO_PKG_NAME"),
    env!("CARGO_PKG_VERSION"),
    CHIP.name
);
