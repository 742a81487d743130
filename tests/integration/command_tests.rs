//! Dynamic dispatch through `Box<dyn Valve>` and `execute`.

use valvekit::config::{ValveConfig, ValveKind, build_solenoid};
use valvekit::valve::{Valve, ValveCommand, ValveTag, execute};
use valvekit::{Capability, ValveError};

use super::mock_hw::{DriverCall, MockDriver};

/// A valve that supplies no capability at all.
struct Bare(ValveTag);

impl Valve for Bare {
    fn tag(&self) -> &ValveTag {
        &self.0
    }
}

#[test]
fn bare_valve_reports_every_capability_missing() {
    let mut v = Bare(ValveTag::new("BareValve", None));
    let cases = [
        (ValveCommand::Open, Capability::Isolation),
        (ValveCommand::Close, Capability::Isolation),
        (ValveCommand::Energize, Capability::Actuation),
        (ValveCommand::Deenergize, Capability::Actuation),
        (ValveCommand::SelectWay("A".into()), Capability::Selector),
    ];
    for (cmd, cap) in cases {
        assert_eq!(execute(&mut v, &cmd), Err(ValveError::NotImplemented(cap)));
    }
}

#[test]
fn configured_solenoid_drives_the_mock() {
    let hw = MockDriver::new();
    let cfg = ValveConfig::new(ValveKind::NoSolenoid, Some("vent"));
    let mut v = build_solenoid(&cfg, hw.clone()).unwrap();

    execute(v.as_mut(), &ValveCommand::Open).unwrap();
    execute(v.as_mut(), &ValveCommand::Energize).unwrap();
    assert_eq!(
        execute(v.as_mut(), &ValveCommand::SelectWay(0.into())),
        Err(ValveError::NotImplemented(Capability::Selector))
    );
    assert_eq!(
        hw.calls(),
        vec![DriverCall::Deenergize, DriverCall::Energize]
    );
}

#[test]
fn configured_selector_rejects_bad_way_first() {
    let hw = MockDriver::new();
    let cfg = ValveConfig::new(ValveKind::SelectorSolenoid, None);
    let mut v = build_solenoid(&cfg, hw.clone()).unwrap();

    assert!(matches!(
        execute(v.as_mut(), &ValveCommand::SelectWay("C".into())),
        Err(ValveError::InvalidArgument(_))
    ));
    execute(v.as_mut(), &ValveCommand::SelectWay("b".into())).unwrap();
    assert_eq!(hw.calls(), vec![DriverCall::Energize]);
}
