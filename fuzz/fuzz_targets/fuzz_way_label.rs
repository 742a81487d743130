//! Fuzz target: `Selector::select_way` with arbitrary labels
//!
//! A label is either accepted as way A/B (and actuates exactly once) or
//! rejected with `InvalidArgument` (and actuates nothing).
//!
//! cargo fuzz run fuzz_way_label

#![no_main]

use libfuzzer_sys::fuzz_target;
use valvekit::ValveError;
use valvekit::error::DriverError;
use valvekit::ports::ActuatorDriver;
use valvekit::valve::{Selector, SelectorSolenoidValve};

#[derive(Default)]
struct Count(usize);

impl ActuatorDriver for Count {
    fn set_energized(&mut self, _energized: bool) -> Result<(), DriverError> {
        self.0 += 1;
        Ok(())
    }
}

fuzz_target!(|data: &[u8]| {
    let Ok(label) = core::str::from_utf8(data) else {
        return;
    };
    let mut valve = SelectorSolenoidValve::new(None, Count::default());
    match valve.select_way(label) {
        Ok(()) => assert_eq!(valve.driver().0, 1),
        Err(ValveError::InvalidArgument(_)) => assert_eq!(valve.driver().0, 0),
        Err(e) => panic!("unexpected error: {e}"),
    }
});
