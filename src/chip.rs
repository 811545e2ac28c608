//! GPIO capabilities of the target chips.

use crate::{
    error::PinError,
    pinouts::PinBinding,
    types::SignalDirection,
};

/// Which GPIO numbers a chip has and what they can be used for.
///
/// Each mask has bit `n` set for GPIO`n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GpioMap {
    pub name: &'static str,
    present: u64,
    input_only: u64,
    reserved: u64,
    strapping: u64,
}

const fn mask(pins: &[u8]) -> u64 {
    let mut mask = 0u64;
    let mut i = 0;
    while i < pins.len() {
        mask |= 1 << pins[i];
        i += 1;
    }
    mask
}

const fn range(first: u8, last: u8) -> u64 {
    let mut mask = 0u64;
    let mut pin = first;
    while pin <= last {
        mask |= 1 << pin;
        pin += 1;
    }
    mask
}

/// Classic ESP32 (ESP32-D0WD and the WROOM/WROVER modules built on it).
pub const ESP32: GpioMap = GpioMap {
    name: "ESP32",
    present: range(0, 19) | range(21, 23) | range(25, 27) | range(32, 39),
    // No output drivers and no internal pulls.
    input_only: range(34, 39),
    // Connected to the integrated SPI flash on every module.
    reserved: range(6, 11),
    // MTDI (GPIO12) selects the flash voltage: held high at reset it picks
    // 1.8V and modules with 3.3V flash won't boot.
    strapping: mask(&[0, 2, 5, 12, 15]),
};

impl GpioMap {
    const fn has(mask: u64, pin: u8) -> bool {
        pin < 64 && (mask >> pin) & 1 == 1
    }

    pub const fn exists(&self, pin: u8) -> bool {
        Self::has(self.present, pin)
    }

    pub const fn is_input_only(&self, pin: u8) -> bool {
        Self::has(self.input_only, pin)
    }

    pub const fn is_reserved(&self, pin: u8) -> bool {
        Self::has(self.reserved, pin)
    }

    pub const fn is_strapping(&self, pin: u8) -> bool {
        Self::has(self.strapping, pin)
    }

    /// Checks that a binding's pin exists, is free, and can work in the
    /// binding's direction.
    pub const fn check(&self, binding: PinBinding) -> Result<(), PinError> {
        let PinBinding { role, pin } = binding;
        let chip = self.name;

        if !self.exists(pin) {
            return Err(PinError::NoSuchPin { role, pin, chip });
        }
        if self.is_reserved(pin) {
            return Err(PinError::Reserved { role, pin, chip });
        }
        if self.is_input_only(pin) {
            if let SignalDirection::Output = role.direction() {
                return Err(PinError::InputOnly { role, pin, chip });
            }
        }
        Ok(())
    }

    /// True if every binding in the table passes [`GpioMap::check`].
    pub const fn accepts(&self, table: &[PinBinding]) -> bool {
        let mut i = 0;
        while i < table.len() {
            if self.check(table[i]).is_err() {
                return false;
            }
            i += 1;
        }
        true
    }
}
