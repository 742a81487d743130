//! Valve wiring configuration.
//!
//! Describes which valve kind sits where, by name.  The surrounding
//! system loads these (from JSON, NVS, provisioning) and turns each one
//! into a boxed [`Valve`] with either a real driver or the simulator.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::drivers::sim::SimDriver;
use crate::error::{Result, ValveError};
use crate::ports::ActuatorDriver;
use crate::valve::{
    NcSolenoidValve, NoSolenoidValve, SelectorSolenoidValve, SimNcSolenoidValve, SimNcValve,
    SimNoSolenoidValve, SimNoValve, SimSelectorValve, Valve,
};

/// Valve kinds that can be wired from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValveKind {
    NcIsolation,
    NoIsolation,
    NcSolenoid,
    NoSolenoid,
    SelectorSolenoid,
}

impl ValveKind {
    /// Whether the kind is driven by a solenoid coil.
    pub const fn has_solenoid(self) -> bool {
        matches!(
            self,
            Self::NcSolenoid | Self::NoSolenoid | Self::SelectorSolenoid
        )
    }
}

/// One valve's configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValveConfig {
    /// Diagnostic label; optional.
    #[serde(default)]
    pub name: Option<String>,
    pub kind: ValveKind,
}

impl ValveConfig {
    pub fn new(kind: ValveKind, name: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_owned),
            kind,
        }
    }

    /// Names must be non-empty and free of whitespace and `.`, which
    /// separates kind from name in diagnostics.
    pub fn validate(&self) -> Result<()> {
        if let Some(name) = &self.name {
            if name.is_empty() {
                return Err(ValveError::Config("valve name is empty"));
            }
            if name.chars().any(|c| c.is_whitespace() || c == '.') {
                return Err(ValveError::Config("valve name contains whitespace or '.'"));
            }
        }
        Ok(())
    }

    /// Parse and validate a JSON valve description.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| {
            warn!("valve config: parse failed: {}", e);
            ValveError::Config("malformed valve config")
        })?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Wire the simulated variant of `cfg.kind`.
pub fn build_simulated(cfg: &ValveConfig) -> Result<Box<dyn Valve>> {
    cfg.validate()?;
    let name = cfg.name.as_deref();
    let valve: Box<dyn Valve> = match cfg.kind {
        ValveKind::NcIsolation => Box::new(SimNcValve::new(name)),
        ValveKind::NoIsolation => Box::new(SimNoValve::new(name)),
        ValveKind::NcSolenoid => Box::new(SimNcSolenoidValve::simulated(name)),
        ValveKind::NoSolenoid => Box::new(SimNoSolenoidValve::simulated(name)),
        ValveKind::SelectorSolenoid => Box::new(SimSelectorValve::simulated(name)),
    };
    Ok(valve)
}

/// Wire `driver` into the solenoid kind named by `cfg`.
///
/// Plain isolation kinds have no coil and are rejected.
pub fn build_solenoid<D>(cfg: &ValveConfig, driver: D) -> Result<Box<dyn Valve>>
where
    D: ActuatorDriver + 'static,
{
    cfg.validate()?;
    let name = cfg.name.as_deref();
    let valve: Box<dyn Valve> = match cfg.kind {
        ValveKind::NcSolenoid => Box::new(NcSolenoidValve::new(name, driver)),
        ValveKind::NoSolenoid => Box::new(NoSolenoidValve::new(name, driver)),
        ValveKind::SelectorSolenoid => Box::new(SelectorSolenoidValve::new(name, driver)),
        ValveKind::NcIsolation | ValveKind::NoIsolation => {
            return Err(ValveError::Config("isolation kind has no solenoid driver"));
        }
    };
    Ok(valve)
}

/// Like [`build_solenoid`] with the no-op driver, keeping the real
/// variant's tag.  Useful for exercising the solenoid path end to end.
pub fn build_with_sim_driver(cfg: &ValveConfig) -> Result<Box<dyn Valve>> {
    build_solenoid(cfg, SimDriver)
}
