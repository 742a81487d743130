//! Simulated valve variants.
//!
//! Same types and capability sets as the real variants, wired to
//! actuators that do nothing.  Calling code cannot tell them apart, which
//! is what makes hardware-free dry runs possible.
//!
//! The simulated solenoid valves run the real [`Solenoid`] over a no-op
//! [`SimDriver`], so they still log `Energizing.` / `De-energizing.` after
//! the logical action.  [`SimNcValve`] and [`SimNoValve`] use
//! [`NoopActuation`] and log only the logical action.

use crate::drivers::sim::SimDriver;
use crate::error::Result;

use super::capability::ActuationKind;
use super::isolation::IsolationValve;
use super::polarity::{NormallyClosed, NormallyOpen, Polarity};
use super::selector::SelectorValve;
use super::solenoid::Solenoid;
use super::state::PhysicalState;
use super::tag::ValveTag;

/// Actuation kind with no body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopActuation;

impl ActuationKind for NoopActuation {
    fn apply(&mut self, _tag: &ValveTag, _state: PhysicalState) -> Result<()> {
        Ok(())
    }
}

pub type SimNcValve = IsolationValve<NormallyClosed, NoopActuation>;
pub type SimNoValve = IsolationValve<NormallyOpen, NoopActuation>;
pub type SimNcSolenoidValve = IsolationValve<NormallyClosed, Solenoid<SimDriver>>;
pub type SimNoSolenoidValve = IsolationValve<NormallyOpen, Solenoid<SimDriver>>;
pub type SimSelectorValve = SelectorValve<Solenoid<SimDriver>>;

impl<P: Polarity> IsolationValve<P, NoopActuation> {
    pub fn new(name: Option<&str>) -> Self {
        Self::from_parts(ValveTag::new("Valve", name).simulated(), NoopActuation)
    }
}

impl<P: Polarity> IsolationValve<P, Solenoid<SimDriver>> {
    pub fn simulated(name: Option<&str>) -> Self {
        Self::from_parts(
            ValveTag::new("SolenoidValve", name).simulated(),
            Solenoid::new(SimDriver),
        )
    }
}

impl SelectorValve<Solenoid<SimDriver>> {
    pub fn simulated(name: Option<&str>) -> Self {
        Self::from_parts(
            ValveTag::new("SelectorSolenoidValve", name).simulated(),
            Solenoid::new(SimDriver),
        )
    }
}
