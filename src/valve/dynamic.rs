//! Object-safe valve handle and command dispatch.
//!
//! Controller code that holds valves as `Box<dyn Valve>` does not know
//! at compile time which capabilities a given valve has.  [`execute`]
//! looks the capability up and fails with
//! [`ValveError::NotImplemented`] when the variant never supplied it.
//!
//! Every [`IsolationValve`] and [`SelectorValve`] is a [`Valve`],
//! whatever its actuation kind.  Direct actuation is offered only when
//! the kind opts in through [`ActuationKind::direct_drive`], as
//! [`Solenoid`](super::solenoid::Solenoid) does.

use crate::error::{Capability, Result, ValveError};

use super::capability::{Actuation, ActuationKind, Isolation, Selector};
use super::isolation::IsolationValve;
use super::polarity::Polarity;
use super::selector::SelectorValve;
use super::state::{PhysicalState, Way, WayId};
use super::tag::ValveTag;

/// A valve of any kind.  Capability accessors default to `None`.
pub trait Valve {
    fn tag(&self) -> &ValveTag;

    fn isolation(&mut self) -> Option<&mut dyn Isolation> {
        None
    }

    fn actuation(&mut self) -> Option<ActuationHandle<'_>> {
        None
    }

    fn selector(&mut self) -> Option<&mut dyn Selector> {
        None
    }
}

/// Borrowed direct-actuation access to a valve: its tag plus the
/// actuator it exposed.
pub struct ActuationHandle<'a> {
    tag: &'a ValveTag,
    actuator: &'a mut dyn ActuationKind,
}

impl<'a> ActuationHandle<'a> {
    pub fn new(tag: &'a ValveTag, actuator: &'a mut dyn ActuationKind) -> Self {
        Self { tag, actuator }
    }

    pub fn tag(&self) -> &ValveTag {
        self.tag
    }
}

impl Actuation for ActuationHandle<'_> {
    fn energize(&mut self) -> Result<()> {
        self.actuator.apply(self.tag, PhysicalState::Energized)
    }

    fn deenergize(&mut self) -> Result<()> {
        self.actuator.apply(self.tag, PhysicalState::Deenergized)
    }
}

/// A logical or physical request against a single valve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValveCommand {
    Open,
    Close,
    Energize,
    Deenergize,
    SelectWay(WayId),
}

impl ValveCommand {
    /// Capability the command needs.
    pub fn capability(&self) -> Capability {
        match self {
            Self::Open | Self::Close => Capability::Isolation,
            Self::Energize | Self::Deenergize => Capability::Actuation,
            Self::SelectWay(_) => Capability::Selector,
        }
    }
}

/// Run `cmd` against `valve`.
///
/// Way identifiers are validated before the capability lookup, so
/// neither bad input nor a missing capability actuates anything.
pub fn execute(valve: &mut dyn Valve, cmd: &ValveCommand) -> Result<()> {
    let missing = ValveError::NotImplemented(cmd.capability());
    match cmd {
        ValveCommand::Open => valve.isolation().ok_or(missing)?.open(),
        ValveCommand::Close => valve.isolation().ok_or(missing)?.close(),
        ValveCommand::Energize => valve.actuation().ok_or(missing)?.energize(),
        ValveCommand::Deenergize => valve.actuation().ok_or(missing)?.deenergize(),
        ValveCommand::SelectWay(id) => {
            let way = Way::parse(id)?;
            valve.selector().ok_or(missing)?.switch_to(way)
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Valve impls
// ───────────────────────────────────────────────────────────────

impl<P: Polarity, A: ActuationKind> Valve for IsolationValve<P, A> {
    fn tag(&self) -> &ValveTag {
        IsolationValve::tag(self)
    }

    fn isolation(&mut self) -> Option<&mut dyn Isolation> {
        Some(self)
    }

    fn actuation(&mut self) -> Option<ActuationHandle<'_>> {
        let (tag, actuator) = self.parts_mut();
        let actuator = actuator.direct_drive()?;
        Some(ActuationHandle::new(tag, actuator))
    }
}

impl<A: ActuationKind> Valve for SelectorValve<A> {
    fn tag(&self) -> &ValveTag {
        SelectorValve::tag(self)
    }

    fn actuation(&mut self) -> Option<ActuationHandle<'_>> {
        let (tag, actuator) = self.parts_mut();
        let actuator = actuator.direct_drive()?;
        Some(ActuationHandle::new(tag, actuator))
    }

    fn selector(&mut self) -> Option<&mut dyn Selector> {
        Some(self)
    }
}
