//! NC / NO solenoid valves against the mock driver.

use valvekit::ValveError;
use valvekit::error::DriverError;
use valvekit::valve::{Actuation, Isolation, NcSolenoidValve, NoSolenoidValve};

use super::mock_hw::{DriverCall, MockDriver};

#[test]
fn nc_open_is_one_energize() {
    let hw = MockDriver::new();
    let mut v = NcSolenoidValve::new(Some("supply"), hw.clone());
    v.open().unwrap();
    assert_eq!(hw.count(DriverCall::Energize), 1);
    assert_eq!(hw.count(DriverCall::Deenergize), 0);
}

#[test]
fn nc_close_is_one_deenergize() {
    let hw = MockDriver::new();
    let mut v = NcSolenoidValve::new(None, hw.clone());
    v.close().unwrap();
    assert_eq!(hw.calls(), vec![DriverCall::Deenergize]);
}

#[test]
fn no_mapping_is_inverted() {
    let hw = MockDriver::new();
    let mut v = NoSolenoidValve::new(None, hw.clone());
    v.open().unwrap();
    assert_eq!(hw.calls(), vec![DriverCall::Deenergize]);
    hw.clear();
    v.close().unwrap();
    assert_eq!(hw.calls(), vec![DriverCall::Energize]);
}

#[test]
fn repeated_calls_are_forwarded() {
    let hw = MockDriver::new();
    let mut v = NcSolenoidValve::new(None, hw.clone());
    v.open().unwrap();
    v.open().unwrap();
    v.close().unwrap();
    v.close().unwrap();
    assert_eq!(
        hw.calls(),
        vec![
            DriverCall::Energize,
            DriverCall::Energize,
            DriverCall::Deenergize,
            DriverCall::Deenergize,
        ]
    );
}

#[test]
fn physical_primitives_ignore_polarity() {
    let hw = MockDriver::new();
    let mut v = NoSolenoidValve::new(None, hw.clone());
    v.energize().unwrap();
    v.deenergize().unwrap();
    assert_eq!(
        hw.calls(),
        vec![DriverCall::Energize, DriverCall::Deenergize]
    );
}

#[test]
fn driver_failure_propagates_without_retry() {
    let hw = MockDriver::new();
    hw.fail_with(Some(DriverError::Timeout));
    let mut v = NoSolenoidValve::new(None, hw.clone());

    assert_eq!(v.close(), Err(ValveError::Driver(DriverError::Timeout)));
    assert_eq!(v.open(), Err(ValveError::Driver(DriverError::Timeout)));
    assert!(hw.calls().is_empty());

    hw.fail_with(None);
    v.close().unwrap();
    assert_eq!(hw.calls(), vec![DriverCall::Energize]);
}

#[test]
fn generic_controller_code_accepts_any_isolation_valve() {
    fn cycle(v: &mut impl Isolation) -> valvekit::Result<()> {
        v.open()?;
        v.close()
    }

    let closed_hw = MockDriver::new();
    let open_hw = MockDriver::new();
    cycle(&mut NcSolenoidValve::new(None, closed_hw.clone())).unwrap();
    cycle(&mut NoSolenoidValve::new(None, open_hw.clone())).unwrap();
    assert_eq!(
        closed_hw.calls(),
        vec![DriverCall::Energize, DriverCall::Deenergize]
    );
    assert_eq!(
        open_hw.calls(),
        vec![DriverCall::Deenergize, DriverCall::Energize]
    );
}
