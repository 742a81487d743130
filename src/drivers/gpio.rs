//! GPIO-driven solenoid coil.
//!
//! One digital output switches the coil through a MOSFET, relay or
//! driver IC.  Works with any `embedded_hal::digital::OutputPin`, so the
//! same driver runs on an ESP32 `PinDriver`, a Linux GPIO line or a
//! test double.
//!
//! ## Wiring
//!
//! | Wiring     | Energized | De-energized |
//! |------------|-----------|--------------|
//! | ActiveHigh | HIGH      | LOW          |
//! | ActiveLow  | LOW       | HIGH         |

use embedded_hal::digital::{Error as _, OutputPin};
use log::warn;

use crate::error::DriverError;
use crate::ports::ActuatorDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Wiring {
    #[default]
    ActiveHigh,
    ActiveLow,
}

impl Wiring {
    /// Pin level that produces the requested coil state.
    pub const fn level(self, energized: bool) -> bool {
        match self {
            Self::ActiveHigh => energized,
            Self::ActiveLow => !energized,
        }
    }
}

/// Solenoid coil on a single output pin.
pub struct GpioSolenoid<P> {
    pin: P,
    wiring: Wiring,
}

impl<P: OutputPin> GpioSolenoid<P> {
    pub fn new(pin: P, wiring: Wiring) -> Self {
        Self { pin, wiring }
    }

    pub fn active_high(pin: P) -> Self {
        Self::new(pin, Wiring::ActiveHigh)
    }

    pub fn active_low(pin: P) -> Self {
        Self::new(pin, Wiring::ActiveLow)
    }

    pub fn wiring(&self) -> Wiring {
        self.wiring
    }

    pub fn into_pin(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> ActuatorDriver for GpioSolenoid<P> {
    fn set_energized(&mut self, energized: bool) -> Result<(), DriverError> {
        let result = if self.wiring.level(energized) {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|e| {
            warn!("gpio solenoid: pin write failed ({:?})", e.kind());
            DriverError::GpioWriteFailed
        })
    }
}
