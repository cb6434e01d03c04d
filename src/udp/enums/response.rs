use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::error_response::ErrorResponse;

/// A response a tracker sends back. Peer records are the 6-byte IPv4
/// compact format; the crawler does not announce over IPv6.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Response {
    Connect(ConnectResponse),
    Announce(AnnounceResponse),
    Error(ErrorResponse),
}
