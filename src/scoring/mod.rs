//! Adaptive crawl scoring.
//!
//! Maps the outcome of one tracker query to a score multiplier and a
//! tracker-set action. Multipliers compound across a torrent's endpoints
//! within one pass; a score falling below [`SCORE_FLOOR`] evicts the
//! torrent from the ranking instead of letting it idle near zero.

/// Query outcome classification.
pub mod enums;

/// Scoring implementation.
pub mod impls;

/// Scoring data structures.
pub mod structs;


/// A productive tracker multiplies the score up.
pub const BOOST_MULTIPLIER: f64 = 1.2;

/// Peers came back but the swarm looks stale.
pub const FADE_MULTIPLIER: f64 = 0.8;

/// The query failed or the swarm is empty.
pub const PENALTY_MULTIPLIER: f64 = 0.5;

/// Scores below this are evicted from the ranking entirely.
pub const SCORE_FLOOR: f64 = 0.005;
