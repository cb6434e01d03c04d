/// Magic connection id carried by every connect request ("new connection").
pub const PROTOCOL_IDENTIFIER: i64 = 4_497_486_125_440;

/// Size of an encoded connect request.
pub const CONNECT_REQUEST_SIZE: usize = 16;

/// Size of a connect response.
pub const CONNECT_RESPONSE_SIZE: usize = 16;

/// Size of an encoded announce request.
pub const ANNOUNCE_REQUEST_SIZE: usize = 98;

/// Fixed header of an announce response, before the peer records.
pub const ANNOUNCE_RESPONSE_HEADER_SIZE: usize = 20;

/// Size of one compact peer record (IPv4 + port).
pub const PEER_RECORD_SIZE: usize = 6;
