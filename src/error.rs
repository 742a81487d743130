//! Unified error types for the valve layer.
//!
//! A single [`ValveError`] enum that every valve operation funnels into.
//! Driver failures are carried unmodified inside [`ValveError::Driver`];
//! this layer never retries, suppresses or remaps them.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level valve error
// ---------------------------------------------------------------------------

/// Every fallible valve operation returns this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValveError {
    /// The actuation backend rejected or failed the request.
    Driver(DriverError),
    /// A way identifier was neither `0`/`1` nor `"A"`/`"B"`.
    InvalidArgument(InvalidWay),
    /// The variant never supplied this capability.
    NotImplemented(Capability),
    /// Valve wiring configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for ValveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Driver(e) => write!(f, "driver: {e}"),
            Self::InvalidArgument(e) => write!(f, "invalid argument: {e}"),
            Self::NotImplemented(c) => write!(f, "not implemented: {c} capability"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for ValveError {}

// ---------------------------------------------------------------------------
// Driver errors
// ---------------------------------------------------------------------------

/// Failure reported by an [`ActuatorDriver`](crate::ports::ActuatorDriver).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverError {
    /// GPIO set failed.
    GpioWriteFailed,
    /// Shared bus or actuator is held by another operation.
    Busy,
    /// The backend gave up waiting for the actuator.
    Timeout,
    /// Backend-specific failure.
    Other(&'static str),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpioWriteFailed => write!(f, "GPIO write failed"),
            Self::Busy => write!(f, "actuator busy"),
            Self::Timeout => write!(f, "actuator timed out"),
            Self::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<DriverError> for ValveError {
    fn from(e: DriverError) -> Self {
        Self::Driver(e)
    }
}

// ---------------------------------------------------------------------------
// Invalid way identifiers
// ---------------------------------------------------------------------------

/// The rejected input of a way selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidWay {
    Index(i64),
    /// Truncated to 16 bytes.
    Label(heapless::String<16>),
}

impl InvalidWay {
    pub(crate) fn label(raw: &str) -> Self {
        let mut s = heapless::String::new();
        for ch in raw.chars() {
            if s.push(ch).is_err() {
                break;
            }
        }
        Self::Label(s)
    }
}

impl fmt::Display for InvalidWay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "unknown way index {i} (expected 0 or 1)"),
            Self::Label(l) => write!(f, "unknown way label {l:?} (expected \"A\" or \"B\")"),
        }
    }
}

impl From<InvalidWay> for ValveError {
    fn from(e: InvalidWay) -> Self {
        Self::InvalidArgument(e)
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Capability families a valve variant may supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Isolation,
    Actuation,
    Selector,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Isolation => write!(f, "isolation"),
            Self::Actuation => write!(f, "actuation"),
            Self::Selector => write!(f, "selector"),
        }
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, ValveError>;
