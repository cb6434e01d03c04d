//! Result of one completed tracker query.

use crate::tracker::structs::peer_address::PeerAddress;

/// Swarm health as reported by a single announce response: the re-announce
/// interval the tracker asked for, the seeder/leecher counts, and the peers
/// it returned, in response order.
#[derive(PartialEq, Eq, Clone, Debug)]
pub struct ScrapeResult {
    pub interval: i32,
    pub seeders: i32,
    pub leechers: i32,
    pub peers: Vec<PeerAddress>,
}
