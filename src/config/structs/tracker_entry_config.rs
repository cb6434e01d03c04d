use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TrackerEntryConfig {
    /// Announce URI, `udp://host:port`.
    pub url: String,
    /// Most peers this tracker returns for one announce.
    pub max_peer_count: u32,
}
