use std::io;
use std::net::SocketAddr;
use std::time::Duration;
use log::debug;
use tokio::net::{lookup_host, UdpSocket};
use tokio::time;
use crate::client::enums::query_error::QueryError;
use crate::client::structs::tracker_client::TrackerClient;
use crate::config::structs::crawler_config::CrawlerConfig;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::scrape_result::ScrapeResult;
use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;
use crate::udp::enums::request::Request;
use crate::udp::enums::response::Response;
use crate::udp::structs::announce_request::AnnounceRequest;
use crate::udp::structs::connect_request::ConnectRequest;
use crate::udp::structs::connection_id::ConnectionId;
use crate::udp::structs::number_of_bytes::NumberOfBytes;
use crate::udp::structs::number_of_peers::NumberOfPeers;
use crate::udp::structs::peer_key::PeerKey;
use crate::udp::structs::port::Port;
use crate::udp::structs::transaction_id::TransactionId;
use crate::udp::udp::{ANNOUNCE_RESPONSE_HEADER_SIZE, PEER_RECORD_SIZE};

impl TrackerClient {
    pub fn new(config: &CrawlerConfig) -> TrackerClient {
        TrackerClient {
            timeout: Duration::from_secs(config.query_timeout),
            peers_wanted: config.peers_wanted,
            peer_prefix: config.peer_prefix.clone(),
        }
    }

    /// Queries one endpoint for one swarm: resolve, handshake, announce.
    ///
    /// The whole exchange runs under a single deadline; on expiry the
    /// socket is dropped and `QueryError::Timeout` is returned. Every call
    /// is a single best-effort attempt.
    pub async fn query(
        &self,
        info_hash: &InfoHash,
        endpoint: &TrackerEndpoint,
    ) -> Result<ScrapeResult, QueryError> {
        if endpoint.url.scheme() != "udp" {
            return Err(QueryError::UnsupportedScheme(endpoint.url.scheme().to_string()));
        }
        let host = endpoint.url.host_str().ok_or_else(||
            QueryError::Protocol(format!("Endpoint {} has no host", endpoint.url))
        )?;
        let port = endpoint.url.port().ok_or_else(||
            QueryError::Protocol(format!("Endpoint {} has no port", endpoint.url))
        )?;

        match time::timeout(self.timeout, self.round_trip(info_hash, host, port)).await {
            Ok(result) => result,
            Err(_) => Err(QueryError::Timeout),
        }
    }

    async fn round_trip(
        &self,
        info_hash: &InfoHash,
        host: &str,
        port: u16,
    ) -> Result<ScrapeResult, QueryError> {
        let address = lookup_host((host, port))
            .await?
            .find(SocketAddr::is_ipv4)
            .ok_or_else(|| QueryError::Network(io::Error::new(
                io::ErrorKind::NotFound,
                format!("No IPv4 address for {host}"),
            )))?;

        let socket = UdpSocket::bind("0.0.0.0:0").await?;
        socket.connect(address).await?;

        let mut buffer = vec![0u8; ANNOUNCE_RESPONSE_HEADER_SIZE + self.peers_wanted.max(0) as usize * PEER_RECORD_SIZE];

        let connection_id = self.connect_exchange(&socket, &mut buffer).await?;
        self.announce_exchange(&socket, &mut buffer, connection_id, info_hash).await
    }

    async fn connect_exchange(
        &self,
        socket: &UdpSocket,
        buffer: &mut [u8],
    ) -> Result<ConnectionId, QueryError> {
        let transaction_id = TransactionId::generate();
        let request = Request::Connect(ConnectRequest { transaction_id });
        socket.send(&request.write_to_vec()?).await?;

        let length = socket.recv(buffer).await?;
        let response = Response::from_bytes(&buffer[..length])
            .map_err(|e| QueryError::Protocol(format!("Malformed connect response: {e}")))?;

        match response {
            Response::Connect(r) => {
                if r.transaction_id != transaction_id {
                    return Err(QueryError::Protocol(format!(
                        "Connect transaction id mismatch: {:x} != {:x}",
                        r.transaction_id.0, transaction_id.0
                    )));
                }
                Ok(r.connection_id)
            }
            Response::Error(r) => Err(QueryError::Protocol(format!(
                "Tracker refused connect: {}", r.message
            ))),
            Response::Announce(_) => Err(QueryError::Protocol(
                "Unexpected announce action in connect phase".to_string(),
            )),
        }
    }

    async fn announce_exchange(
        &self,
        socket: &UdpSocket,
        buffer: &mut [u8],
        connection_id: ConnectionId,
        info_hash: &InfoHash,
    ) -> Result<ScrapeResult, QueryError> {
        let transaction_id = TransactionId::generate();
        let request = Request::Announce(AnnounceRequest {
            connection_id,
            transaction_id,
            info_hash: *info_hash,
            peer_id: PeerId::generate(&self.peer_prefix),
            bytes_downloaded: NumberOfBytes(0),
            bytes_uploaded: NumberOfBytes(0),
            bytes_left: NumberOfBytes(0),
            event: AnnounceEvent::None,
            ip_address: None,
            key: PeerKey(0),
            peers_wanted: NumberOfPeers(self.peers_wanted),
            port: Port(0),
        });
        socket.send(&request.write_to_vec()?).await?;

        let length = socket.recv(buffer).await?;
        if length < ANNOUNCE_RESPONSE_HEADER_SIZE {
            return Err(QueryError::Protocol(format!(
                "Unexpected announce response size {length}"
            )));
        }
        let response = Response::from_bytes(&buffer[..length])
            .map_err(|e| QueryError::Protocol(format!("Malformed announce response: {e}")))?;

        match response {
            Response::Announce(r) => {
                if r.transaction_id != transaction_id {
                    return Err(QueryError::Protocol(format!(
                        "Announce transaction id mismatch: {:x} != {:x}",
                        r.transaction_id.0, transaction_id.0
                    )));
                }
                debug!(
                    "[CLIENT] {} answered: {} seeders, {} leechers, {} peers",
                    info_hash, r.seeders.0, r.leechers.0, r.peers.len()
                );
                Ok(ScrapeResult {
                    interval: r.announce_interval.0,
                    seeders: r.seeders.0,
                    leechers: r.leechers.0,
                    peers: r.peers,
                })
            }
            Response::Error(r) => Err(QueryError::Protocol(format!(
                "Tracker refused announce: {}", r.message
            ))),
            Response::Connect(_) => Err(QueryError::Protocol(
                "Unexpected connect action in announce phase".to_string(),
            )),
        }
    }
}
