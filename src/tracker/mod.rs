//! Swarm domain types.
//!
//! The identifiers and value types the crawler works with: the 20-byte
//! `InfoHash` of a swarm, the synthesized `PeerId` the client announces
//! with, compact `PeerAddress` records as trackers return them, the
//! `TrackerEndpoint` / `TrackerCatalog` pair describing where to ask, and
//! the `ScrapeResult` a completed query yields.

/// Announce event codes (BEP 15).
pub mod enums;

/// Implementation blocks for the domain types.
pub mod impls;

/// Domain data structures.
pub mod structs;

/// Unit tests for the domain types.
pub mod tests;
