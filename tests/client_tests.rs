use std::str::FromStr;
use tokio::net::UdpSocket;
use swarmwatch::client::enums::query_error::QueryError;
use swarmwatch::client::structs::tracker_client::TrackerClient;
use swarmwatch::config::structs::configuration::Configuration;
use swarmwatch::tracker::structs::info_hash::InfoHash;
use swarmwatch::tracker::structs::tracker_endpoint::TrackerEndpoint;

/// How the scripted tracker should (mis)behave.
enum TrackerScript {
    /// Answer properly, returning these compact peer records.
    Answer(Vec<[u8; 6]>),
    /// Answer the connect with a mangled transaction id.
    WrongTransactionId,
    /// Receive and never reply.
    Silent,
    /// Refuse the connect with an error response (action 3).
    Refuse(&'static str),
}

async fn spawn_scripted_tracker(script: TrackerScript) -> u16 {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();
    tokio::spawn(async move {
        let mut buffer = [0u8; 1024];
        loop {
            let (length, from) = match socket.recv_from(&mut buffer).await {
                Ok(received) => received,
                Err(_) => return,
            };
            let is_connect = length >= 16 && buffer[8..12] == 0i32.to_be_bytes();
            match &script {
                TrackerScript::Silent => {}
                TrackerScript::Refuse(message) => {
                    let mut reply = Vec::new();
                    reply.extend_from_slice(&3i32.to_be_bytes());
                    reply.extend_from_slice(&buffer[12..16]);
                    reply.extend_from_slice(message.as_bytes());
                    let _ = socket.send_to(&reply, from).await;
                }
                TrackerScript::WrongTransactionId => {
                    if is_connect {
                        let sent = i32::from_be_bytes(buffer[12..16].try_into().unwrap());
                        let mut reply = Vec::new();
                        reply.extend_from_slice(&0i32.to_be_bytes());
                        reply.extend_from_slice(&sent.wrapping_add(1).to_be_bytes());
                        reply.extend_from_slice(&1i64.to_be_bytes());
                        let _ = socket.send_to(&reply, from).await;
                    }
                }
                TrackerScript::Answer(peers) => {
                    if is_connect {
                        let mut reply = Vec::new();
                        reply.extend_from_slice(&0i32.to_be_bytes());
                        reply.extend_from_slice(&buffer[12..16]);
                        reply.extend_from_slice(&0x00C0FFEEi64.to_be_bytes());
                        let _ = socket.send_to(&reply, from).await;
                    } else {
                        let mut reply = Vec::new();
                        reply.extend_from_slice(&1i32.to_be_bytes());
                        reply.extend_from_slice(&buffer[12..16]);
                        reply.extend_from_slice(&1800i32.to_be_bytes());
                        reply.extend_from_slice(&4i32.to_be_bytes());
                        reply.extend_from_slice(&9i32.to_be_bytes());
                        for record in peers {
                            reply.extend_from_slice(record);
                        }
                        let _ = socket.send_to(&reply, from).await;
                    }
                }
            }
        }
    });
    port
}

fn test_client(timeout_secs: u64) -> TrackerClient {
    let mut config = Configuration::init();
    config.crawler_config.query_timeout = timeout_secs;
    TrackerClient::new(&config.crawler_config)
}

fn endpoint(port: u16) -> TrackerEndpoint {
    TrackerEndpoint::parse(&format!("udp://127.0.0.1:{port}"), 200).unwrap()
}

fn info_hash() -> InfoHash {
    InfoHash::from_str("0123456789abcdef0123456789abcdef01234567").unwrap()
}

#[tokio::test]
async fn test_query_full_round_trip() {
    let port = spawn_scripted_tracker(TrackerScript::Answer(vec![
        [127, 0, 0, 1, 0x1A, 0xE1],
        [10, 0, 0, 9, 0x00, 0x50],
    ])).await;

    let result = test_client(2).query(&info_hash(), &endpoint(port)).await.unwrap();

    assert_eq!(result.interval, 1800);
    assert_eq!(result.leechers, 4);
    assert_eq!(result.seeders, 9);
    assert_eq!(result.peers.len(), 2);
    assert_eq!(result.peers[0].to_string(), "127.0.0.1:6881");
    assert_eq!(result.peers[1].to_string(), "10.0.0.9:80");
}

#[tokio::test]
async fn test_query_rejects_mismatched_transaction_id() {
    let port = spawn_scripted_tracker(TrackerScript::WrongTransactionId).await;

    let error = test_client(2).query(&info_hash(), &endpoint(port)).await.unwrap_err();

    match error {
        QueryError::Protocol(message) => {
            assert!(message.contains("transaction id mismatch"), "{message}");
        }
        other => panic!("Expected Protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_times_out_on_silent_tracker() {
    let port = spawn_scripted_tracker(TrackerScript::Silent).await;

    let error = test_client(1).query(&info_hash(), &endpoint(port)).await.unwrap_err();

    assert!(error.is_timeout(), "Expected Timeout, got {error:?}");
}

#[tokio::test]
async fn test_query_surfaces_tracker_error_message() {
    let port = spawn_scripted_tracker(TrackerScript::Refuse("access denied")).await;

    let error = test_client(2).query(&info_hash(), &endpoint(port)).await.unwrap_err();

    match error {
        QueryError::Protocol(message) => {
            assert!(message.contains("access denied"), "{message}");
        }
        other => panic!("Expected Protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_query_rejects_non_udp_scheme() {
    let endpoint = TrackerEndpoint::parse("http://tracker.example.org/announce", 200).unwrap();

    let error = test_client(1).query(&info_hash(), &endpoint).await.unwrap_err();

    assert!(matches!(error, QueryError::UnsupportedScheme(_)), "{error:?}");
}
