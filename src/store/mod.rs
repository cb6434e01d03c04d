//! External ranking / tracker-set store.
//!
//! The redis store owns all durable crawler state: the `torrents` sorted
//! set ranking swarms by score, the per-torrent tracker sets, the seen-peer
//! sets used for dedup, and the hour-TTL "recently processed" markers.
//!
//! # Failure policy
//!
//! A store outage is the only condition that halts forward progress: every
//! command is retried against the same store forever with a fixed delay,
//! logging each failure, while the connection manager re-establishes the
//! link underneath. Nothing is surfaced to scoring; a worker blocked on the
//! store simply finishes its pass late.

/// Store error types.
pub mod errors;

/// Connector implementation.
pub mod impls;

/// Connector data structures.
pub mod structs;

/// Store access traits.
pub mod traits;

/// Unit tests for the store types.
pub mod tests;
