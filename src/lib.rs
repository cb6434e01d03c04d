//! # Swarmwatch
//!
//! An unattended BitTorrent swarm health crawler. Swarmwatch speaks the
//! UDP tracker protocol (BEP 15) directly against a catalog of public
//! trackers and keeps a live, score-ranked picture of how alive every
//! swarm in its backlog is.
//!
//! ## How it works
//!
//! A score-ranked backlog of torrents lives in Redis. The scheduler claims
//! the highest-scored torrents each pass and hands them to a bounded pool
//! of workers. A worker walks its torrent's tracker set, performs one
//! connect + announce round trip per endpoint, and feeds the outcome to
//! the scorer: productive trackers boost the torrent's priority, stale or
//! dead ones decay it until the torrent falls out of the ranking
//! altogether. Trackers that stop producing peers for a torrent are pruned
//! from its set; an empty set re-seeds from the catalog on the next visit.
//!
//! ## Modules
//!
//! - [`client`] - UDP tracker protocol client (one round trip per call)
//! - [`common`] - Hex helpers shared by the identifier types
//! - [`config`] - TOML configuration loading and defaults
//! - [`crawler`] - Pass scheduler and per-torrent workers
//! - [`reporting`] - Peer-sighting dedup collaborator boundary
//! - [`scoring`] - Outcome-to-multiplier decision rules
//! - [`stats`] - Best-effort counters and the console snapshot
//! - [`store`] - Redis ranking / tracker-set store
//! - [`tracker`] - Swarm domain types and the tracker catalog
//! - [`udp`] - BEP 15 wire codec

/// UDP tracker protocol client.
pub mod client;

/// Shared hex helpers.
pub mod common;

/// Configuration management.
pub mod config;

/// Crawl scheduling and workers.
pub mod crawler;

/// Logging setup.
pub mod logging;

/// Peer reporting collaborator boundary.
pub mod reporting;

/// Adaptive crawl scoring.
pub mod scoring;

/// Crawler statistics.
pub mod stats;

/// External ranking / tracker-set store.
pub mod store;

/// CLI argument parsing.
pub mod structs;

/// Swarm domain types.
pub mod tracker;

/// UDP tracker wire codec.
pub mod udp;
