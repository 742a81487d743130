//! Mock actuator driver for integration tests.
//!
//! Records every coil command so tests can assert on the full actuation
//! history.  Clones share the same history, so a test keeps one handle
//! and gives the other to the valve.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use valvekit::error::DriverError;
use valvekit::ports::ActuatorDriver;

// ── Driver call record ────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverCall {
    Energize,
    Deenergize,
}

// ── MockDriver ────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockDriver {
    calls: Rc<RefCell<Vec<DriverCall>>>,
    fail_with: Rc<Cell<Option<DriverError>>>,
}

#[allow(dead_code)]
impl MockDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<DriverCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: DriverCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }

    /// Make every subsequent request fail with `err` (or succeed again
    /// with `None`).  Failed requests are not recorded.
    pub fn fail_with(&self, err: Option<DriverError>) {
        self.fail_with.set(err);
    }
}

impl ActuatorDriver for MockDriver {
    fn set_energized(&mut self, energized: bool) -> Result<(), DriverError> {
        if let Some(e) = self.fail_with.get() {
            return Err(e);
        }
        self.calls.borrow_mut().push(if energized {
            DriverCall::Energize
        } else {
            DriverCall::Deenergize
        });
        Ok(())
    }
}
