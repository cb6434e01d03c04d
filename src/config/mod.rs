//! Configuration management.
//!
//! The crawler is configured through a single `config.toml`, created with
//! sane defaults on first run (`--create-config`). Sections: logging,
//! crawler tuning, store address and the tracker catalog.

/// Configuration error enumeration.
pub mod enums;

/// Implementation blocks for loading and saving.
pub mod impls;

/// Configuration data structures.
pub mod structs;
