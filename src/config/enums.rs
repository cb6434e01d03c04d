//! Configuration error enumeration.

pub mod configuration_error;
