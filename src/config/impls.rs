//! Implementation blocks for loading and saving.

pub mod configuration;
pub mod configuration_error;
