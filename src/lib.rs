//! Pinout for the ESP32 motor controller board.
//!
//! The pin table in [`pinouts`] is the single place GPIO numbers are assigned.
//! Everything else in the crate checks, claims or wraps those pins.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod chip;
pub mod config;
pub mod driver;
pub mod error;
pub mod limit_switch;
pub mod memlog;
pub mod pinouts;
pub mod self_check;
pub mod types;

pub use error::PinError;
pub use pinouts::{
    LIMIT_SWITCH_PIN, MOTOR_DIRECTION_PIN, MOTOR_ENABLE_PIN, MOTOR_STEP_PIN, PIN_TABLE, PinBinding,
    PinRole,
};
