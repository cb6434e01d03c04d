//! Crawler data structures.

/// A torrent claimed for the current pass.
pub mod claimed_torrent;

/// The crawler context: everything a worker needs.
pub mod swarm_crawler;
