//! Tracker announce endpoint.

use url::Url;

/// A single tracker endpoint drawn from the catalog.
///
/// `max_peer_count` is the most peers this tracker is known to return for
/// one announce; the scoring thresholds are derived from it. Immutable once
/// constructed.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TrackerEndpoint {
    pub url: Url,
    pub max_peer_count: u32,
}
