//! Fuzz target: `ValveConfig::from_json`
//!
//! Arbitrary input must never panic; anything accepted must build a
//! simulated valve.
//!
//! cargo fuzz run fuzz_valve_config

#![no_main]

use libfuzzer_sys::fuzz_target;
use valvekit::config::{ValveConfig, build_simulated};

fuzz_target!(|data: &[u8]| {
    let Ok(json) = core::str::from_utf8(data) else {
        return;
    };
    if let Ok(cfg) = ValveConfig::from_json(json) {
        assert!(build_simulated(&cfg).is_ok());
    }
});
