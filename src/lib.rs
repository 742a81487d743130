//! Valve actuation library.
//!
//! Isolation, solenoid and 3/2 selector valves with normally-open /
//! normally-closed polarity, composed from independent polarity and
//! actuation-kind axes.  Hardware access goes through the
//! [`ports::ActuatorDriver`] port; everything else is pure logic and
//! runs on the host.

#![deny(unused_must_use)]

pub mod config;
pub mod drivers;
pub mod error;
pub mod ports;
pub mod valve;

pub use error::{Capability, DriverError, InvalidWay, Result, ValveError};
