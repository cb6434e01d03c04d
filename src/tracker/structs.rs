//! Domain data structures.

/// 20-byte swarm identifier.
pub mod info_hash;

/// 20-byte client identifier sent in announces.
pub mod peer_id;

/// Compact IPv4 peer address record.
pub mod peer_address;

/// A single announce endpoint with its peer capacity.
pub mod tracker_endpoint;

/// The static table of known tracker endpoints.
pub mod tracker_catalog;

/// Swarm counts and peers from one completed query.
pub mod scrape_result;
