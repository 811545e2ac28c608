//! Board pinout.
//!
//! GPIO numbers for the motor driver and the homing switches. Retargeting the
//! firmware to another board revision means editing the four constants below
//! and nothing else. The assertions at the bottom of this file refuse to build
//! a table with shared pins or pins the target chip can't use.

use core::fmt::Display;

use crate::{config, types::SignalDirection};

//
// Driver pins
//
/// Pulses on every servo/stepper step. Likely labelled PUL on drivers.
pub const MOTOR_STEP_PIN: u8 = 14;
/// Selects the step direction. Likely labelled DIR on drivers.
///
/// iHSV57 users: DIP switch #5 inverts the motor direction entirely, no
/// firmware change needed.
pub const MOTOR_DIRECTION_PIN: u8 = 27;
/// Motor enable. Likely labelled ENA on drivers.
pub const MOTOR_ENABLE_PIN: u8 = 26;

//
// Homing and safety pins
//
/// The limit (homing) switch input.
///
/// One or more normally-closed switches are wired in series between this pin
/// and GND, and the pin's pull-up is enabled. While every switch in the chain
/// is closed the pin is held low. Opening any switch breaks the chain and the
/// pull-up takes the pin to [`config::LIMIT_TRIGGERED_LEVEL`]. A cut wire
/// therefore reads the same as a triggered switch.
pub const LIMIT_SWITCH_PIN: u8 = 12;

/// What a pin is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinRole {
    MotorStep,
    MotorDirection,
    MotorEnable,
    LimitSwitch,
}

impl PinRole {
    pub const ALL: [PinRole; 4] = [
        PinRole::MotorStep,
        PinRole::MotorDirection,
        PinRole::MotorEnable,
        PinRole::LimitSwitch,
    ];

    /// The GPIO number bound to this role.
    pub const fn pin(self) -> u8 {
        match self {
            PinRole::MotorStep => MOTOR_STEP_PIN,
            PinRole::MotorDirection => MOTOR_DIRECTION_PIN,
            PinRole::MotorEnable => MOTOR_ENABLE_PIN,
            PinRole::LimitSwitch => LIMIT_SWITCH_PIN,
        }
    }

    pub const fn direction(self) -> SignalDirection {
        match self {
            PinRole::MotorStep | PinRole::MotorDirection | PinRole::MotorEnable => {
                SignalDirection::Output
            }
            PinRole::LimitSwitch => SignalDirection::Input,
        }
    }

    /// Name of the constant holding this role's pin.
    pub const fn name(self) -> &'static str {
        match self {
            PinRole::MotorStep => "MOTOR_STEP_PIN",
            PinRole::MotorDirection => "MOTOR_DIRECTION_PIN",
            PinRole::MotorEnable => "MOTOR_ENABLE_PIN",
            PinRole::LimitSwitch => "LIMIT_SWITCH_PIN",
        }
    }
}

impl Display for PinRole {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinBinding {
    pub role: PinRole,
    pub pin: u8,
}

impl PinBinding {
    pub const fn of(role: PinRole) -> Self {
        PinBinding {
            role,
            pin: role.pin(),
        }
    }
}

impl Display for PinBinding {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} = GPIO{} ({})", self.role, self.pin, self.role.direction())
    }
}

/// Every role with its pin, in [`PinRole::ALL`] order.
pub const PIN_TABLE: [PinBinding; 4] = {
    let mut table = [PinBinding::of(PinRole::MotorStep); 4];
    let mut i = 0;
    while i < PinRole::ALL.len() {
        table[i] = PinBinding::of(PinRole::ALL[i]);
        i += 1;
    }
    table
};

pub const fn binding(role: PinRole) -> PinBinding {
    PinBinding::of(role)
}

/// The role bound to a GPIO, if any.
pub fn role_of(pin: u8) -> Option<PinRole> {
    PIN_TABLE
        .iter()
        .find(|binding| binding.pin == pin)
        .map(|binding| binding.role)
}

/// Finds the first pair of bindings where two different roles share a pin, in
/// table order.
pub const fn first_conflict(table: &[PinBinding]) -> Option<(PinBinding, PinBinding)> {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].pin == table[j].pin && !same_role(table[i].role, table[j].role) {
                return Some((table[i], table[j]));
            }
            j += 1;
        }
        i += 1;
    }
    None
}

/// Finds the first role bound more than once, with its first two bindings.
pub const fn first_duplicate_role(table: &[PinBinding]) -> Option<(PinBinding, PinBinding)> {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if same_role(table[i].role, table[j].role) {
                return Some((table[i], table[j]));
            }
            j += 1;
        }
        i += 1;
    }
    None
}

const fn same_role(a: PinRole, b: PinRole) -> bool {
    a as u8 == b as u8
}

/// True if every role is bound once and no two roles share a pin.
pub const fn all_distinct(table: &[PinBinding]) -> bool {
    first_duplicate_role(table).is_none() && first_conflict(table).is_none()
}

const _: () = assert!(
    all_distinct(&PIN_TABLE),
    "a role is bound twice or two roles share a GPIO"
);
const _: () = assert!(
    config::CHIP.accepts(&PIN_TABLE),
    "a pin role is bound to a GPIO the target chip can't use for it"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_numbers_match_the_board() {
        assert_eq!(MOTOR_STEP_PIN, 14);
        assert_eq!(MOTOR_DIRECTION_PIN, 27);
        assert_eq!(MOTOR_ENABLE_PIN, 26);
        assert_eq!(LIMIT_SWITCH_PIN, 12);
    }

    #[test]
    fn table_follows_role_order() {
        let roles: Vec<PinRole> = PIN_TABLE.iter().map(|binding| binding.role).collect();
        assert_eq!(roles, PinRole::ALL);
        for binding in PIN_TABLE {
            assert_eq!(binding.pin, binding.role.pin());
            assert_eq!(binding, super::binding(binding.role));
        }
    }

    #[test]
    fn no_two_roles_share_a_pin() {
        assert!(all_distinct(&PIN_TABLE));
        for a in PIN_TABLE {
            for b in PIN_TABLE {
                if a.role != b.role {
                    assert_ne!(a.pin, b.pin, "{} and {}", a.role, b.role);
                }
            }
        }
    }

    #[test]
    fn repeated_reads_are_stable() {
        let first = PinRole::MotorStep.pin();
        for _ in 0..8 {
            assert_eq!(PinRole::MotorStep.pin(), first);
            assert_eq!(MOTOR_STEP_PIN, first);
        }
    }

    #[test]
    fn step_pin_is_never_the_limit_input() {
        assert_eq!(role_of(MOTOR_STEP_PIN), Some(PinRole::MotorStep));
        assert_ne!(role_of(MOTOR_STEP_PIN), Some(PinRole::LimitSwitch));
        assert_eq!(role_of(LIMIT_SWITCH_PIN), Some(PinRole::LimitSwitch));
        assert_eq!(role_of(0), None);
    }

    #[test]
    fn directions() {
        assert_eq!(PinRole::MotorStep.direction(), SignalDirection::Output);
        assert_eq!(PinRole::MotorDirection.direction(), SignalDirection::Output);
        assert_eq!(PinRole::MotorEnable.direction(), SignalDirection::Output);
        assert_eq!(PinRole::LimitSwitch.direction(), SignalDirection::Input);
    }

    #[test]
    fn conflict_is_reported_in_table_order() {
        let table = [
            PinBinding { role: PinRole::MotorStep, pin: 4 },
            PinBinding { role: PinRole::MotorDirection, pin: 5 },
            PinBinding { role: PinRole::MotorEnable, pin: 4 },
            PinBinding { role: PinRole::LimitSwitch, pin: 5 },
        ];
        assert_eq!(first_conflict(&table), Some((table[0], table[2])));
        assert!(!all_distinct(&table));
        assert!(all_distinct(&[]));
    }

    #[test]
    fn conflict_carries_the_colliding_pin() {
        let table = [
            PinBinding { role: PinRole::MotorStep, pin: 25 },
            PinBinding { role: PinRole::MotorStep, pin: 13 },
            PinBinding { role: PinRole::MotorDirection, pin: 13 },
        ];
        let (first, second) = first_conflict(&table).unwrap();
        assert_eq!(first, table[1]);
        assert_eq!(second, table[2]);
        assert_eq!(first.pin, 13);
    }

    #[test]
    fn role_bound_twice() {
        let table = [
            PinBinding { role: PinRole::MotorStep, pin: 25 },
            PinBinding { role: PinRole::MotorStep, pin: 13 },
        ];
        assert_eq!(first_duplicate_role(&table), Some((table[0], table[1])));
        assert_eq!(first_conflict(&table), None);
        assert!(!all_distinct(&table));
        assert_eq!(first_duplicate_role(&PIN_TABLE), None);
    }

    #[test]
    fn display() {
        assert_eq!(
            binding(PinRole::LimitSwitch).to_string(),
            "LIMIT_SWITCH_PIN = GPIO12 (input)"
        );
    }
}
