//! Simulated actuator driver.
//!
//! Accepts every request and touches no hardware.  Used for dry runs
//! and hardware-free integration tests.

use crate::error::DriverError;
use crate::ports::ActuatorDriver;

/// No-op driver.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimDriver;

impl SimDriver {
    pub fn new() -> Self {
        Self
    }
}

impl ActuatorDriver for SimDriver {
    fn set_energized(&mut self, _energized: bool) -> Result<(), DriverError> {
        Ok(())
    }
}
