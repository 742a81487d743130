//! Solenoid actuation and the NC / NO solenoid valves built on it.
//!
//! A [`Solenoid`] turns a coil state into one
//! [`ActuatorDriver::set_energized`] call.  Combined with a polarity it
//! gives [`NcSolenoidValve`] and [`NoSolenoidValve`], which expose both
//! the logical ([`Isolation`](super::capability::Isolation)) and
//! physical ([`Actuation`]) contracts.

use crate::error::{Result, ValveError};
use crate::ports::ActuatorDriver;

use super::capability::{Actuation, ActuationKind};
use super::isolation::IsolationValve;
use super::polarity::{NormallyClosed, NormallyOpen, Polarity};
use super::state::PhysicalState;
use super::tag::ValveTag;

/// Electromagnetic actuation through a driver.
#[derive(Debug)]
pub struct Solenoid<D> {
    driver: D,
}

impl<D: ActuatorDriver> Solenoid<D> {
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn driver_mut(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D: ActuatorDriver> ActuationKind for Solenoid<D> {
    fn apply(&mut self, tag: &ValveTag, state: PhysicalState) -> Result<()> {
        match state {
            PhysicalState::Energized => tag.note(format_args!("Energizing.")),
            PhysicalState::Deenergized => tag.note(format_args!("De-energizing.")),
        }
        self.driver
            .set_energized(state.is_energized())
            .map_err(ValveError::Driver)
    }

    fn direct_drive(&mut self) -> Option<&mut dyn ActuationKind> {
        Some(self)
    }
}

// ───────────────────────────────────────────────────────────────
// Solenoid isolation valves
// ───────────────────────────────────────────────────────────────

pub type SolenoidValve<P, D> = IsolationValve<P, Solenoid<D>>;
/// Normally-closed solenoid valve: open energizes, close de-energizes.
pub type NcSolenoidValve<D> = SolenoidValve<NormallyClosed, D>;
/// Normally-open solenoid valve: open de-energizes, close energizes.
pub type NoSolenoidValve<D> = SolenoidValve<NormallyOpen, D>;

impl<P: Polarity, D: ActuatorDriver> IsolationValve<P, Solenoid<D>> {
    pub fn new(name: Option<&str>, driver: D) -> Self {
        Self::from_parts(ValveTag::new("SolenoidValve", name), Solenoid::new(driver))
    }

    pub fn driver(&self) -> &D {
        self.actuator().driver()
    }
}

impl<P: Polarity, D: ActuatorDriver> Actuation for IsolationValve<P, Solenoid<D>> {
    fn energize(&mut self) -> Result<()> {
        let (tag, solenoid) = self.parts_mut();
        solenoid.apply(tag, PhysicalState::Energized)
    }

    fn deenergize(&mut self) -> Result<()> {
        let (tag, solenoid) = self.parts_mut();
        solenoid.apply(tag, PhysicalState::Deenergized)
    }
}
