use std::io;
use std::io::Write;
use byteorder::{NetworkEndian, WriteBytesExt};
use crate::udp::enums::request::Request;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::udp::{ANNOUNCE_REQUEST_SIZE, CONNECT_REQUEST_SIZE, PROTOCOL_IDENTIFIER};

impl From<ConnectRequest> for Request {
    fn from(r: ConnectRequest) -> Self {
        Self::Connect(r)
    }
}

impl From<AnnounceRequest> for Request {
    fn from(r: AnnounceRequest) -> Self {
        Self::Announce(r)
    }
}

impl Request {
    pub fn write(&self, bytes: &mut impl Write) -> Result<(), io::Error> {
        match self {
            Request::Connect(r) => {
                bytes.write_i64::<NetworkEndian>(PROTOCOL_IDENTIFIER)?;
                bytes.write_i32::<NetworkEndian>(0)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;
            }

            Request::Announce(r) => {
                bytes.write_i64::<NetworkEndian>(r.connection_id.0)?;
                bytes.write_i32::<NetworkEndian>(1)?;
                bytes.write_i32::<NetworkEndian>(r.transaction_id.0)?;

                bytes.write_all(&r.info_hash.0)?;
                bytes.write_all(&r.peer_id.0)?;

                bytes.write_i64::<NetworkEndian>(r.bytes_downloaded.0)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_left.0)?;
                bytes.write_i64::<NetworkEndian>(r.bytes_uploaded.0)?;

                bytes.write_i32::<NetworkEndian>(r.event.to_i32())?;

                bytes.write_all(&r.ip_address.map_or([0; 4], |ip| ip.octets()))?;

                bytes.write_u32::<NetworkEndian>(r.key.0)?;
                bytes.write_i32::<NetworkEndian>(r.peers_wanted.0)?;
                bytes.write_u16::<NetworkEndian>(r.port.0)?;
            }
        }

        Ok(())
    }

    pub fn estimated_size(&self) -> usize {
        match self {
            Request::Connect(_) => CONNECT_REQUEST_SIZE,
            Request::Announce(_) => ANNOUNCE_REQUEST_SIZE,
        }
    }

    pub fn write_to_vec(&self) -> Result<Vec<u8>, io::Error> {
        let mut buffer = Vec::with_capacity(self.estimated_size());
        self.write(&mut buffer)?;
        Ok(buffer)
    }
}
