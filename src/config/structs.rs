//! Configuration data structures.

/// The root configuration document.
pub mod configuration;

/// Crawler tuning knobs.
pub mod crawler_config;

/// Ranking store connection settings.
pub mod store_config;

/// One tracker catalog entry.
pub mod tracker_entry_config;
