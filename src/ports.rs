//! Port traits: the boundary between valve logic and the actuation backend.
//!
//! ```text
//!   Valve ──▶ ActuatorDriver ──▶ GPIO / relay board / simulator
//! ```
//!
//! The valve layer knows nothing about pins, serial ports or bus
//! addresses.  Whatever owns the hardware implements [`ActuatorDriver`]
//! and hands it to the valve at construction time.
//!
//! ## Usage constraints
//!
//! - A driver is driven by exactly one valve, through `&mut self`.
//! - Exclusion on a shared bus is the driver's job, not the valve's.
//! - Timeouts, if any, belong to the driver and surface as
//!   [`DriverError::Timeout`].

use crate::error::DriverError;

// ───────────────────────────────────────────────────────────────
// Actuator driver port (driven adapter: valve → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the valve calls this to energize or de-energize its
/// actuator.
///
/// Implementations must tolerate being asked for the state the actuator
/// is already in.
pub trait ActuatorDriver {
    fn set_energized(&mut self, energized: bool) -> Result<(), DriverError>;
}

impl<D: ActuatorDriver + ?Sized> ActuatorDriver for &mut D {
    fn set_energized(&mut self, energized: bool) -> Result<(), DriverError> {
        (**self).set_energized(energized)
    }
}

impl<D: ActuatorDriver + ?Sized> ActuatorDriver for Box<D> {
    fn set_energized(&mut self, energized: bool) -> Result<(), DriverError> {
        (**self).set_energized(energized)
    }
}
