//! Simulated variants are drop-in substitutes for the real ones.

use valvekit::drivers::sim::SimDriver;
use valvekit::valve::{
    Actuation, Isolation, NcSolenoidValve, Selector, SimNcSolenoidValve, SimNcValve,
    SimNoSolenoidValve, SimNoValve, SimSelectorValve,
};

use super::mock_hw::MockDriver;

fn exercise_solenoid<V: Isolation + Actuation>(v: &mut V) {
    v.open().unwrap();
    v.close().unwrap();
    v.energize().unwrap();
    v.deenergize().unwrap();
}

#[test]
fn every_simulated_operation_succeeds() {
    let mut nc = SimNcValve::new(Some("a"));
    nc.open().unwrap();
    nc.close().unwrap();

    let mut no = SimNoValve::new(Some("b"));
    no.open().unwrap();
    no.close().unwrap();

    exercise_solenoid(&mut SimNcSolenoidValve::simulated(Some("c")));
    exercise_solenoid(&mut SimNoSolenoidValve::simulated(Some("d")));

    let mut sel = SimSelectorValve::simulated(Some("e"));
    sel.select_way(0).unwrap();
    sel.select_way("B").unwrap();
    sel.energize().unwrap();
    sel.deenergize().unwrap();
}

#[test]
fn simulated_solenoids_use_the_noop_driver() {
    let v = SimNcSolenoidValve::simulated(None);
    let _: &SimDriver = v.driver();
    let s = SimSelectorValve::simulated(None);
    let _: &SimDriver = s.driver();
}

#[test]
fn real_and_simulated_share_call_sites() {
    let hw = MockDriver::new();
    exercise_solenoid(&mut NcSolenoidValve::new(None, hw.clone()));
    exercise_solenoid(&mut SimNcSolenoidValve::simulated(None));
    assert_eq!(hw.calls().len(), 4);
}
