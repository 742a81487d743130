//! Capability contracts.
//!
//! ```text
//!   Isolation / Selector   (logical: open, close, select_way)
//!          │
//!       Polarity            (NC / NO mapping, type-level)
//!          │
//!     ActuationKind         (how a coil state is achieved)
//!          │
//!     ActuatorDriver        (port: GPIO, relay board, simulator)
//! ```
//!
//! Each public logical operation is a provided method that forwards to
//! exactly one required resolver.  Implementors supply only the
//! resolver, so `close()` always reaches `drive_to(Closed)` and can never
//! forward to itself.  A variant that lacks a capability simply does not
//! implement the trait; there is no runtime "not implemented" path here.

use crate::error::Result;

use super::state::{LogicalState, PhysicalState, Way, WayId};
use super::tag::ValveTag;

// ───────────────────────────────────────────────────────────────
// Actuation (physical primitive)
// ───────────────────────────────────────────────────────────────

/// Energize / de-energize an actuator.  Knows nothing about open or
/// closed.
///
/// Calls are not deduplicated: asking twice actuates twice.
pub trait Actuation {
    fn energize(&mut self) -> Result<()>;

    fn deenergize(&mut self) -> Result<()>;

    fn actuate(&mut self, state: PhysicalState) -> Result<()> {
        match state {
            PhysicalState::Energized => self.energize(),
            PhysicalState::Deenergized => self.deenergize(),
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Isolation (logical open / close)
// ───────────────────────────────────────────────────────────────

/// Two-state isolation valve.
pub trait Isolation {
    /// Resolver: bring the valve to `state`.  Exactly one actuation per
    /// call.
    fn drive_to(&mut self, state: LogicalState) -> Result<()>;

    fn open(&mut self) -> Result<()> {
        self.drive_to(LogicalState::Open)
    }

    fn close(&mut self) -> Result<()> {
        self.drive_to(LogicalState::Closed)
    }
}

// ───────────────────────────────────────────────────────────────
// Selector (3/2 way selection)
// ───────────────────────────────────────────────────────────────

/// Three-port, two-position valve.
pub trait Selector {
    /// Resolver: route the common port to `way`.
    fn switch_to(&mut self, way: Way) -> Result<()>;

    /// Validate `way` (`0`/`1`, `"A"`/`"B"`, case-insensitive) and switch.
    /// Unrecognised identifiers fail before any actuation.
    fn select_way<W: Into<WayId>>(&mut self, way: W) -> Result<()>
    where
        Self: Sized,
    {
        let way = Way::parse(&way.into())?;
        self.switch_to(way)
    }
}

// ───────────────────────────────────────────────────────────────
// Actuation kind (strategy axis)
// ───────────────────────────────────────────────────────────────

/// How a coil state is physically achieved.  Solenoids, motorised
/// actuators or pneumatic pilots implement this independently of
/// polarity.
pub trait ActuationKind {
    /// Bring the actuator to `state`.  `tag` identifies the owning valve
    /// for diagnostics.
    fn apply(&mut self, tag: &ValveTag, state: PhysicalState) -> Result<()>;

    /// The actuator as callers may drive it directly (energize /
    /// de-energize) through a dynamic valve handle.  `None`, the default,
    /// keeps the valve's physical side private.
    fn direct_drive(&mut self) -> Option<&mut dyn ActuationKind> {
        None
    }
}

impl<T: ActuationKind + ?Sized> ActuationKind for &mut T {
    fn apply(&mut self, tag: &ValveTag, state: PhysicalState) -> Result<()> {
        (**self).apply(tag, state)
    }

    fn direct_drive(&mut self) -> Option<&mut dyn ActuationKind> {
        (**self).direct_drive()
    }
}

impl<T: ActuationKind + ?Sized> ActuationKind for Box<T> {
    fn apply(&mut self, tag: &ValveTag, state: PhysicalState) -> Result<()> {
        (**self).apply(tag, state)
    }

    fn direct_drive(&mut self) -> Option<&mut dyn ActuationKind> {
        (**self).direct_drive()
    }
}
