use crate::pinouts::PinRole;

/// A pin assignment the target chip or the table itself can't satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PinError {
    #[error("{role} is bound to GPIO{pin}, which the {chip} doesn't have")]
    NoSuchPin {
        role: PinRole,
        pin: u8,
        chip: &'static str,
    },
    #[error("{role} drives GPIO{pin}, which is input-only on the {chip}")]
    InputOnly {
        role: PinRole,
        pin: u8,
        chip: &'static str,
    },
    #[error("{role} is bound to GPIO{pin}, which the {chip} wires to the SPI flash")]
    Reserved {
        role: PinRole,
        pin: u8,
        chip: &'static str,
    },
    #[error("{role} is bound twice, to GPIO{first_pin} and GPIO{second_pin}")]
    DuplicateRole {
        role: PinRole,
        first_pin: u8,
        second_pin: u8,
    },
    #[error("{first} and {second} are both bound to GPIO{pin}")]
    Conflict {
        first: PinRole,
        second: PinRole,
        pin: u8,
    },
}
