use std::convert::TryInto;
use std::io;
use std::io::Cursor;
use byteorder::{NetworkEndian, ReadBytesExt};
use crate::tracker::structs::peer_address::PeerAddress;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_interval::AnnounceInterval;
use crate::udp::structs::announce_response::AnnounceResponse;
use crate::udp::structs::connect_response::ConnectResponse;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::error_response::ErrorResponse;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::PEER_RECORD_SIZE;

impl From<ConnectResponse> for Response {
    fn from(r: ConnectResponse) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceResponse> for Response {
    fn from(r: AnnounceResponse) -> Self {
        Self::Announce(r)
    }
}

impl From<ErrorResponse> for Response {
    fn from(r: ErrorResponse) -> Self {
        Self::Error(r)
    }
}

impl Response {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, io::Error> {
        let mut cursor = Cursor::new(bytes);

        let action = cursor.read_i32::<NetworkEndian>()?;
        let transaction_id = cursor.read_i32::<NetworkEndian>()?;

        match action {
            // Connect
            0 => {
                let connection_id = cursor.read_i64::<NetworkEndian>()?;

                Ok(ConnectResponse {
                    connection_id: ConnectionId(connection_id),
                    transaction_id: TransactionId(transaction_id),
                }
                    .into())
            }
            // Announce
            1 => {
                let announce_interval = cursor.read_i32::<NetworkEndian>()?;
                let leechers = cursor.read_i32::<NetworkEndian>()?;
                let seeders = cursor.read_i32::<NetworkEndian>()?;

                let position = cursor.position() as usize;
                let remaining_bytes = &bytes[position..];

                let peers = parse_peers(remaining_bytes)?;
                Ok(AnnounceResponse {
                    transaction_id: TransactionId(transaction_id),
                    announce_interval: AnnounceInterval(announce_interval),
                    leechers: NumberOfPeers(leechers),
                    seeders: NumberOfPeers(seeders),
                    peers,
                }
                    .into())
            }
            // Error
            3 => {
                let position = cursor.position() as usize;
                let message_bytes = &bytes[position..];
                let message = String::from_utf8_lossy(message_bytes).into_owned();

                Ok(ErrorResponse {
                    transaction_id: TransactionId(transaction_id),
                    message: message.into(),
                }
                    .into())
            }
            _ => Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Unexpected response action {action}"),
            )),
        }
    }
}

fn parse_peers(bytes: &[u8]) -> Result<Vec<PeerAddress>, io::Error> {
    let peer_count = bytes.len() / PEER_RECORD_SIZE;
    let mut peers = Vec::with_capacity(peer_count);

    for chunk in bytes.chunks_exact(PEER_RECORD_SIZE) {
        let record: [u8; 6] = chunk.try_into().map_err(|_|
            io::Error::new(io::ErrorKind::InvalidData, "Invalid peer record bytes")
        )?;
        peers.push(PeerAddress::from(record));
    }

    Ok(peers)
}
