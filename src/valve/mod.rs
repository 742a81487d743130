//! Valve taxonomy: logical contracts, polarity and actuation composed
//! into concrete valve kinds.
//!
//! | Type                     | Isolation | Actuation | Selector |
//! |--------------------------|-----------|-----------|----------|
//! | `NcValve` / `NoValve`    | yes       |           |          |
//! | `NcSolenoidValve`        | yes       | yes       |          |
//! | `NoSolenoidValve`        | yes       | yes       |          |
//! | `SelectorSolenoidValve`  |           | yes       | yes      |
//!
//! Every row has a `Sim*` counterpart in [`sim`] with the same
//! capabilities and no hardware behind it.
//!
//! Valves take `&mut self` for every operation.  One controller drives a
//! valve at a time; callers sharing a valve across threads must
//! serialise access themselves.

pub mod capability;
pub mod dynamic;
pub mod isolation;
pub mod polarity;
pub mod selector;
pub mod sim;
pub mod solenoid;
pub mod state;
pub mod tag;

pub use capability::{Actuation, ActuationKind, Isolation, Selector};
pub use dynamic::{ActuationHandle, Valve, ValveCommand, execute};
pub use isolation::{IsolationValve, NcValve, NoValve};
pub use polarity::{NormallyClosed, NormallyOpen, Polarity, PolarityKind};
pub use selector::{SelectorSolenoidValve, SelectorValve};
pub use sim::{
    NoopActuation, SimNcSolenoidValve, SimNcValve, SimNoSolenoidValve, SimNoValve, SimSelectorValve,
};
pub use solenoid::{NcSolenoidValve, NoSolenoidValve, Solenoid, SolenoidValve};
pub use state::{LogicalState, PhysicalState, Way, WayId};
pub use tag::ValveTag;
