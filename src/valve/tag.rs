//! Diagnostic context carried by every valve instance.
//!
//! The tag is an explicit value owned by the valve.  It is rendered into
//! each log record instead of selecting a per-instance logger.

use core::fmt;

use log::debug;

use super::polarity::PolarityKind;

/// Log target for every valve diagnostic record.
pub const LOG_TARGET: &str = "valvekit::valve";

/// Type tag plus optional instance name.
///
/// Renders as `[Sim][NC|NO]<kind>[.<name>]`, e.g. `NCSolenoidValve.purge`
/// or `SimNOValve`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValveTag {
    kind: &'static str,
    polarity: Option<PolarityKind>,
    simulated: bool,
    name: Option<String>,
}

impl ValveTag {
    pub fn new(kind: &'static str, name: Option<&str>) -> Self {
        Self {
            kind,
            polarity: None,
            simulated: false,
            name: name.map(str::to_owned),
        }
    }

    #[must_use]
    pub fn with_polarity(mut self, polarity: PolarityKind) -> Self {
        self.polarity = Some(polarity);
        self
    }

    #[must_use]
    pub fn simulated(mut self) -> Self {
        self.simulated = true;
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn polarity(&self) -> Option<PolarityKind> {
        self.polarity
    }

    pub fn is_simulated(&self) -> bool {
        self.simulated
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Emit the pre-action debug record.  Never fails.
    pub(crate) fn note(&self, action: fmt::Arguments<'_>) {
        debug!(target: LOG_TARGET, "{} | {}", self, action);
    }
}

impl fmt::Display for ValveTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.simulated {
            f.write_str("Sim")?;
        }
        if let Some(p) = self.polarity {
            f.write_str(p.abbrev())?;
        }
        f.write_str(self.kind)?;
        if let Some(name) = &self.name {
            write!(f, ".{name}")?;
        }
        Ok(())
    }
}
