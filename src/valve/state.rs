//! Logical and physical valve states, and way identifiers.
//!
//! None of these are stored by a valve.  They are transient intents that
//! flow from a caller into an actuation side effect.

use core::fmt;

use crate::error::InvalidWay;

/// Requested position of an isolation valve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalState {
    Open,
    Closed,
}

/// State of the actuator coil.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalState {
    Energized,
    Deenergized,
}

impl PhysicalState {
    pub const fn is_energized(self) -> bool {
        matches!(self, Self::Energized)
    }
}

/// Canonical way of a 3/2 selector valve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Way {
    A,
    B,
}

impl Way {
    /// Index encoding: `A` = 0, `B` = 1.
    pub const fn index(self) -> u8 {
        match self {
            Self::A => 0,
            Self::B => 1,
        }
    }

    /// Validate a raw identifier.  Labels are case-insensitive and may be
    /// surrounded by whitespace.
    pub fn parse(id: &WayId) -> Result<Self, InvalidWay> {
        match id {
            WayId::Index(0) => Ok(Self::A),
            WayId::Index(1) => Ok(Self::B),
            WayId::Index(i) => Err(InvalidWay::Index(*i)),
            WayId::Label(l) => match l.trim() {
                s if s.eq_ignore_ascii_case("a") => Ok(Self::A),
                s if s.eq_ignore_ascii_case("b") => Ok(Self::B),
                _ => Err(InvalidWay::label(l)),
            },
        }
    }
}

impl fmt::Display for Way {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::B => write!(f, "B"),
        }
    }
}

/// Unvalidated way identifier as received from a caller: either the
/// integer encoding or a symbolic label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WayId {
    Index(i64),
    Label(String),
}

impl From<i64> for WayId {
    fn from(i: i64) -> Self {
        Self::Index(i)
    }
}

impl From<i32> for WayId {
    fn from(i: i32) -> Self {
        Self::Index(i64::from(i))
    }
}

impl From<u8> for WayId {
    fn from(i: u8) -> Self {
        Self::Index(i64::from(i))
    }
}

impl From<&str> for WayId {
    fn from(s: &str) -> Self {
        Self::Label(s.to_owned())
    }
}

impl From<String> for WayId {
    fn from(s: String) -> Self {
        Self::Label(s)
    }
}

impl From<Way> for WayId {
    fn from(w: Way) -> Self {
        Self::Index(i64::from(w.index()))
    }
}
