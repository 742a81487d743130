//! Plain two-state isolation valve, generic over polarity and actuation
//! kind.

use core::marker::PhantomData;

use crate::error::Result;

use super::capability::{ActuationKind, Isolation};
use super::polarity::{NormallyClosed, NormallyOpen, Polarity, PolarityKind};
use super::state::LogicalState;
use super::tag::ValveTag;

/// Isolation valve whose polarity `P` is fixed by type and whose
/// actuation is delegated to `A`.
///
/// Holds no position state: every `open`/`close` resolves through `P`
/// and issues exactly one actuation.
#[derive(Debug)]
pub struct IsolationValve<P, A> {
    tag: ValveTag,
    actuator: A,
    _polarity: PhantomData<P>,
}

/// Normally-closed isolation valve.
pub type NcValve<A> = IsolationValve<NormallyClosed, A>;
/// Normally-open isolation valve.
pub type NoValve<A> = IsolationValve<NormallyOpen, A>;

impl<P: Polarity, A: ActuationKind> IsolationValve<P, A> {
    /// Wrap an arbitrary actuation kind.
    pub fn with_actuator(name: Option<&str>, actuator: A) -> Self {
        Self::from_parts(ValveTag::new("Valve", name), actuator)
    }

    pub(crate) fn from_parts(tag: ValveTag, actuator: A) -> Self {
        Self {
            tag: tag.with_polarity(P::KIND),
            actuator,
            _polarity: PhantomData,
        }
    }

    pub fn tag(&self) -> &ValveTag {
        &self.tag
    }

    pub fn polarity(&self) -> PolarityKind {
        P::KIND
    }

    pub fn actuator(&self) -> &A {
        &self.actuator
    }

    pub fn into_actuator(self) -> A {
        self.actuator
    }

    /// Split borrow for capability impls that drive the actuator
    /// directly.
    pub(crate) fn parts_mut(&mut self) -> (&ValveTag, &mut A) {
        (&self.tag, &mut self.actuator)
    }
}

impl<P: Polarity, A: ActuationKind> Isolation for IsolationValve<P, A> {
    fn drive_to(&mut self, state: LogicalState) -> Result<()> {
        match state {
            LogicalState::Open => self.tag.note(format_args!("Opening.")),
            LogicalState::Closed => self.tag.note(format_args!("Closing.")),
        }
        self.actuator.apply(&self.tag, P::resolve(state))
    }
}
