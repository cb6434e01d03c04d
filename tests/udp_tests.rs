use std::str::FromStr;
use swarmwatch::tracker::enums::announce_event::AnnounceEvent;
use swarmwatch::tracker::structs::info_hash::InfoHash;
use swarmwatch::tracker::structs::peer_id::PeerId;
use swarmwatch::udp::enums::request::Request;
use swarmwatch::udp::enums::response::Response;
use swarmwatch::udp::structs::announce_request::AnnounceRequest;
use swarmwatch::udp::structs::connect_request::ConnectRequest;
use swarmwatch::udp::structs::connection_id::ConnectionId;
use swarmwatch::udp::structs::number_of_bytes::NumberOfBytes;
use swarmwatch::udp::structs::number_of_peers::NumberOfPeers;
use swarmwatch::udp::structs::peer_key::PeerKey;
use swarmwatch::udp::structs::port::Port;
use swarmwatch::udp::structs::transaction_id::TransactionId;
use swarmwatch::udp::udp::PROTOCOL_IDENTIFIER;

#[test]
fn test_udp_connect_request_writing() {
    let request = Request::Connect(ConnectRequest {
        transaction_id: TransactionId(12345),
    });

    let bytes = request.write_to_vec().unwrap();

    assert_eq!(bytes.len(), 16, "Connect request should be 16 bytes");
    assert_eq!(&bytes[0..8], &PROTOCOL_IDENTIFIER.to_be_bytes(), "Magic constant should lead");
    assert_eq!(&bytes[8..12], &0i32.to_be_bytes(), "Action should be connect");
}

#[test]
fn test_udp_announce_request_writing() {
    let request = Request::Announce(AnnounceRequest {
        connection_id: ConnectionId(67890),
        transaction_id: TransactionId(54321),
        info_hash: InfoHash::from_str("ffffffffffffffffffffffffffffffffffffffff").unwrap(),
        peer_id: PeerId(*b"-SW0061-999999999999"),
        bytes_downloaded: NumberOfBytes(0),
        bytes_uploaded: NumberOfBytes(0),
        bytes_left: NumberOfBytes(0),
        event: AnnounceEvent::None,
        ip_address: None,
        key: PeerKey(0),
        peers_wanted: NumberOfPeers(200),
        port: Port(0),
    });

    let bytes = request.write_to_vec().unwrap();

    assert_eq!(bytes.len(), 98, "Announce request should be 98 bytes");
    assert_eq!(&bytes[8..12], &1i32.to_be_bytes(), "Action should be announce");
    assert_eq!(&bytes[16..36], &[0xffu8; 20], "Info hash should follow the header");
}

#[test]
fn test_udp_connect_response_parsing() {
    let mut packet = vec![];
    packet.extend_from_slice(&0i32.to_be_bytes());
    packet.extend_from_slice(&12345i32.to_be_bytes());
    packet.extend_from_slice(&67890i64.to_be_bytes());

    let result = Response::from_bytes(&packet);

    assert!(result.is_ok(), "Should parse valid connect response");
    match result.unwrap() {
        Response::Connect(connect_resp) => {
            assert_eq!(connect_resp.transaction_id.0, 12345, "Transaction ID should match");
            assert_eq!(connect_resp.connection_id.0, 67890, "Connection ID should match");
        }
        _ => panic!("Should be Connect response"),
    }
}

#[test]
fn test_udp_announce_response_parsing() {
    let mut packet = vec![];
    packet.extend_from_slice(&1i32.to_be_bytes());
    packet.extend_from_slice(&777i32.to_be_bytes());
    packet.extend_from_slice(&1800i32.to_be_bytes());
    packet.extend_from_slice(&5i32.to_be_bytes());
    packet.extend_from_slice(&12i32.to_be_bytes());
    packet.extend_from_slice(&[127, 0, 0, 1, 0x1A, 0xE1]);

    match Response::from_bytes(&packet).unwrap() {
        Response::Announce(announce_resp) => {
            assert_eq!(announce_resp.announce_interval.0, 1800);
            assert_eq!(announce_resp.leechers.0, 5);
            assert_eq!(announce_resp.seeders.0, 12);
            assert_eq!(announce_resp.peers.len(), 1);
            assert_eq!(announce_resp.peers[0].to_string(), "127.0.0.1:6881");
        }
        other => panic!("Should be Announce response, got {:?}", other),
    }
}

#[test]
fn test_udp_malformed_packet() {
    let packet = vec![1, 2, 3];

    let result = Response::from_bytes(&packet);

    assert!(result.is_err(), "Should fail on malformed packet");
}
