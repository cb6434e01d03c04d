// Performance benchmarks for Swarmwatch
// Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::RngExt;
use swarmwatch::scoring::enums::query_outcome::QueryOutcome;
use swarmwatch::scoring::structs::score_update::ScoreUpdate;
use swarmwatch::tracker::enums::announce_event::AnnounceEvent;
use swarmwatch::tracker::structs::info_hash::InfoHash;
use swarmwatch::tracker::structs::peer_id::PeerId;
use swarmwatch::udp::enums::request::Request;
use swarmwatch::udp::enums::response::Response;
use swarmwatch::udp::structs::announce_request::AnnounceRequest;
use swarmwatch::udp::structs::connection_id::ConnectionId;
use swarmwatch::udp::structs::number_of_bytes::NumberOfBytes;
use swarmwatch::udp::structs::number_of_peers::NumberOfPeers;
use swarmwatch::udp::structs::peer_key::PeerKey;
use swarmwatch::udp::structs::port::Port;
use swarmwatch::udp::structs::transaction_id::TransactionId;

fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let mut bytes = [0u8; 20];
    for byte in &mut bytes {
        *byte = rng.random();
    }
    InfoHash(bytes)
}

fn announce_request() -> AnnounceRequest {
    AnnounceRequest {
        connection_id: ConnectionId(0x1122334455667788),
        transaction_id: TransactionId::generate(),
        info_hash: random_info_hash(),
        peer_id: PeerId::generate("-SW0061-"),
        bytes_downloaded: NumberOfBytes(0),
        bytes_uploaded: NumberOfBytes(0),
        bytes_left: NumberOfBytes(0),
        event: AnnounceEvent::None,
        ip_address: None,
        key: PeerKey(0),
        peers_wanted: NumberOfPeers(200),
        port: Port(0),
    }
}

fn announce_response_packet(peer_count: usize) -> Vec<u8> {
    let mut packet = Vec::with_capacity(20 + peer_count * 6);
    packet.extend_from_slice(&1i32.to_be_bytes());
    packet.extend_from_slice(&1i32.to_be_bytes());
    packet.extend_from_slice(&1800i32.to_be_bytes());
    packet.extend_from_slice(&50i32.to_be_bytes());
    packet.extend_from_slice(&150i32.to_be_bytes());
    for index in 0..peer_count {
        packet.extend_from_slice(&[10, 0, (index >> 8) as u8, index as u8]);
        packet.extend_from_slice(&6881u16.to_be_bytes());
    }
    packet
}

fn bench_announce_request_encoding(c: &mut Criterion) {
    let request = Request::Announce(announce_request());

    c.bench_function("announce_request_encoding", |b| {
        b.iter(|| {
            black_box(request.write_to_vec().unwrap());
        });
    });
}

fn bench_announce_response_parsing(c: &mut Criterion) {
    let packet = announce_response_packet(200);

    c.bench_function("announce_response_parsing", |b| {
        b.iter(|| {
            black_box(Response::from_bytes(black_box(&packet)).unwrap());
        });
    });
}

fn bench_score_evaluation(c: &mut Criterion) {
    let outcome = QueryOutcome::Scraped { peer_count: 200, new_peer_count: 31 };

    c.bench_function("score_evaluation", |b| {
        b.iter(|| {
            black_box(ScoreUpdate::evaluate(black_box(&outcome), 200, 0.15));
        });
    });
}

criterion_group!(
    benches,
    bench_announce_request_encoding,
    bench_announce_response_parsing,
    bench_score_evaluation
);
criterion_main!(benches);
