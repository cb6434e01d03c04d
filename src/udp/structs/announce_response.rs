use crate::tracker::structs::peer_address::PeerAddress;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::transaction_id::TransactionId;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct AnnounceResponse {
    pub transaction_id: TransactionId,
    pub announce_interval: AnnounceInterval,
    pub leechers: NumberOfPeers,
    pub seeders: NumberOfPeers,
    pub peers: Vec<PeerAddress>,
}
