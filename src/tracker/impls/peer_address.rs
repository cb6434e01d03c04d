use std::fmt;
use std::fmt::Formatter;
use std::net::Ipv4Addr;
use crate::tracker::structs::peer_address::PeerAddress;

impl fmt::Display for PeerAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

impl From<[u8; 6]> for PeerAddress {
    fn from(record: [u8; 6]) -> Self {
        PeerAddress {
            ip: Ipv4Addr::new(record[0], record[1], record[2], record[3]),
            port: u16::from_be_bytes([record[4], record[5]]),
        }
    }
}
