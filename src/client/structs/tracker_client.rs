//! The UDP tracker protocol client.

use std::time::Duration;

/// Performs one connect + announce round trip per call.
///
/// Carries only the knobs the wire exchange needs; it knows nothing about
/// scoring or scheduling. Cheap to clone, holds no socket between calls.
#[derive(Clone, Debug)]
pub struct TrackerClient {
    /// Absolute deadline covering resolve, handshake and announce.
    pub(crate) timeout: Duration,
    /// num_want sent in announces, also sizes the response read buffer.
    pub(crate) peers_wanted: i32,
    /// Client prefix for the synthesized per-call peer id.
    pub(crate) peer_prefix: String,
}
