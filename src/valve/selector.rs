//! 3/2 selector valve.
//!
//! Routes the common port to way A or way B.  With the coil
//! de-energized the valve rests on way A; energizing switches to way B.

use crate::error::Result;
use crate::ports::ActuatorDriver;

use super::capability::{Actuation, ActuationKind, Selector};
use super::solenoid::Solenoid;
use super::state::{PhysicalState, Way};
use super::tag::ValveTag;

/// Coil state that selects `way`.
pub const fn coil_state(way: Way) -> PhysicalState {
    match way {
        Way::A => PhysicalState::Deenergized,
        Way::B => PhysicalState::Energized,
    }
}

/// Three-port, two-position valve over an arbitrary actuation kind.
#[derive(Debug)]
pub struct SelectorValve<A> {
    tag: ValveTag,
    actuator: A,
}

/// Solenoid-actuated 3/2 valve.
pub type SelectorSolenoidValve<D> = SelectorValve<Solenoid<D>>;

impl<A: ActuationKind> SelectorValve<A> {
    pub fn with_actuator(name: Option<&str>, actuator: A) -> Self {
        Self::from_parts(ValveTag::new("SelectorValve", name), actuator)
    }

    pub(crate) fn from_parts(tag: ValveTag, actuator: A) -> Self {
        Self { tag, actuator }
    }

    pub fn tag(&self) -> &ValveTag {
        &self.tag
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn into_actuator(self) -> A {
        self.actuator
    }

    pub(crate) fn parts_mut(&mut self) -> (&ValveTag, &mut A) {
        (&self.tag, &mut self.actuator)
    }
}

impl<A: ActuationKind> Selector for SelectorValve<A> {
    fn switch_to(&mut self, way: Way) -> Result<()> {
        self.tag.note(format_args!("Selecting way {way}."));
        self.actuator.apply(&self.tag, coil_state(way))
    }
}

impl<D: ActuatorDriver> SelectorValve<Solenoid<D>> {
    pub fn new(name: Option<&str>, driver: D) -> Self {
        Self::from_parts(
            ValveTag::new("SelectorSolenoidValve", name),
            Solenoid::new(driver),
        )
    }

    pub fn driver(&self) -> &D {
        self.actuator.driver()
    }
}

impl<D: ActuatorDriver> Actuation for SelectorValve<Solenoid<D>> {
    fn energize(&mut self) -> Result<()> {
        self.actuator.apply(&self.tag, PhysicalState::Energized)
    }

    fn deenergize(&mut self) -> Result<()> {
        self.actuator.apply(&self.tag, PhysicalState::Deenergized)
    }
}
