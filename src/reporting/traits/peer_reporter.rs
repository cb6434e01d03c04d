use async_trait::async_trait;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_address::PeerAddress;

/// Records one peer sighting for one torrent.
#[async_trait]
pub trait PeerReporter: Send + Sync {
    /// Returns true when the peer had not been seen for this torrent
    /// before. The worker counts these to judge swarm freshness.
    async fn report_peer(&self, peer: &PeerAddress, info_hash: &InfoHash) -> bool;
}
