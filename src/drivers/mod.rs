//! Actuation backends implementing [`ActuatorDriver`](crate::ports::ActuatorDriver).

pub mod gpio;
pub mod sim;
