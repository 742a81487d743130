//! 3/2 selector valve against the mock driver.

use valvekit::ValveError;
use valvekit::error::InvalidWay;
use valvekit::valve::{Selector, SelectorSolenoidValve, Way, WayId};

use super::mock_hw::{DriverCall, MockDriver};

fn selector() -> (SelectorSolenoidValve<MockDriver>, MockDriver) {
    let hw = MockDriver::new();
    (SelectorSolenoidValve::new(Some("inlet"), hw.clone()), hw)
}

#[test]
fn way_a_forms_are_equivalent() {
    let mut seqs = Vec::new();
    for id in [WayId::from(0), WayId::from("A"), WayId::from("a")] {
        let (mut v, hw) = selector();
        v.select_way(id).unwrap();
        seqs.push(hw.calls());
    }
    assert!(seqs.iter().all(|s| *s == vec![DriverCall::Deenergize]));
}

#[test]
fn way_b_forms_are_equivalent() {
    let (mut v, hw) = selector();
    v.select_way(1).unwrap();
    v.select_way("B").unwrap();
    v.select_way(Way::B).unwrap();
    assert_eq!(hw.calls(), vec![DriverCall::Energize; 3]);
}

#[test]
fn unknown_ways_fail_before_actuation() {
    let (mut v, hw) = selector();
    assert_eq!(
        v.select_way(2),
        Err(ValveError::InvalidArgument(InvalidWay::Index(2)))
    );
    let Err(ValveError::InvalidArgument(InvalidWay::Label(label))) = v.select_way("C") else {
        panic!("expected invalid label");
    };
    assert_eq!(label.as_str(), "C");
    assert!(hw.calls().is_empty());
}
