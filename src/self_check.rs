//! Startup check of a pin table against the chip it runs on.
//!
//! The same rules are asserted at compile time for [`PIN_TABLE`], this runs
//! them again at boot and also reports what is legal but worth knowing about.
//!
//! [`PIN_TABLE`]: crate::pinouts::PIN_TABLE

use core::fmt::Display;

use heapless::Vec;

use crate::{
    chip::GpioMap,
    error::PinError,
    pinouts::{PinBinding, PinRole, first_conflict, first_duplicate_role},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    /// The pin is sampled at reset, external levels on it can change how the chip boots.
    Strapping { role: PinRole, pin: u8 },
}

impl Display for Warning {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Warning::Strapping { role, pin } => {
                write!(f, "{role} is on strapping pin GPIO{pin}")
            }
        }
    }
}

/// Findings for a table that passed the check. Holds at most one warning per binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report<const N: usize> {
    warnings: Vec<Warning, N>,
}

impl<const N: usize> Report<N> {
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Rejects a role bound twice, then two roles sharing a pin, then the first
/// binding the chip can't use. A table may leave roles out.
pub fn run<const N: usize>(
    map: &GpioMap,
    table: &[PinBinding; N],
) -> Result<Report<N>, PinError> {
    if let Some((first, second)) = first_duplicate_role(table) {
        return Err(PinError::DuplicateRole {
            role: first.role,
            first_pin: first.pin,
            second_pin: second.pin,
        });
    }
    if let Some((first, second)) = first_conflict(table) {
        return Err(PinError::Conflict {
            first: first.role,
            second: second.role,
            pin: first.pin,
        });
    }

    let mut warnings = Vec::new();
    for binding in table {
        map.check(*binding)?;

        if map.is_strapping(binding.pin) {
            // Capacity is N and there's at most one warning per binding.
            let _ = warnings.push(Warning::Strapping {
                role: binding.role,
                pin: binding.pin,
            });
        }
    }

    Ok(Report { warnings })
}
