//! Static table of known tracker endpoints.

use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;

/// All tracker endpoints the crawler knows about, loaded once at boot from
/// configuration. A torrent whose stored tracker set is empty is seeded
/// with every endpoint in here.
#[derive(Clone, Debug)]
pub struct TrackerCatalog {
    pub(crate) endpoints: Vec<TrackerEndpoint>,
}
