//! Normally-open / normally-closed polarity.
//!
//! Polarity is the only thing that decides which coil state a logical
//! position needs.  It is fixed by type: a valve's polarity parameter is
//! one of the zero-sized markers below, never a runtime field.
//!
//! | Polarity | Open        | Closed      |
//! |----------|-------------|-------------|
//! | NC       | Energized   | Deenergized |
//! | NO       | Deenergized | Energized   |

use super::state::{LogicalState, PhysicalState};

/// Runtime mirror of a [`Polarity`] marker, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarityKind {
    NormallyClosed,
    NormallyOpen,
}

impl PolarityKind {
    /// Map a logical position onto the coil state for this polarity.
    pub const fn resolve(self, state: LogicalState) -> PhysicalState {
        match (self, state) {
            (Self::NormallyClosed, LogicalState::Open)
            | (Self::NormallyOpen, LogicalState::Closed) => PhysicalState::Energized,
            (Self::NormallyClosed, LogicalState::Closed)
            | (Self::NormallyOpen, LogicalState::Open) => PhysicalState::Deenergized,
        }
    }

    /// Position the valve rests in with the coil de-energized.
    pub const fn rest_state(self) -> LogicalState {
        match self {
            Self::NormallyClosed => LogicalState::Closed,
            Self::NormallyOpen => LogicalState::Open,
        }
    }

    pub const fn abbrev(self) -> &'static str {
        match self {
            Self::NormallyClosed => "NC",
            Self::NormallyOpen => "NO",
        }
    }
}

/// Type-level polarity.  New polarities implement this without touching
/// any actuation code.
pub trait Polarity {
    const KIND: PolarityKind;

    fn resolve(state: LogicalState) -> PhysicalState {
        Self::KIND.resolve(state)
    }
}

/// De-energized is closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormallyClosed;

/// De-energized is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormallyOpen;

impl Polarity for NormallyClosed {
    const KIND: PolarityKind = PolarityKind::NormallyClosed;
}

impl Polarity for NormallyOpen {
    const KIND: PolarityKind = PolarityKind::NormallyOpen;
}
