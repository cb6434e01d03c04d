use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::connect_request::ConnectRequest;

/// A request the crawler sends to a tracker. Scrape (action=2) is not
/// modeled: the crawler measures swarms through announce responses.
#[derive(PartialEq, Eq, Clone, Debug)]
pub enum Request {
    Connect(ConnectRequest),
    Announce(AnnounceRequest),
}
