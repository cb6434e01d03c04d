//! Wire message data structures.

/// Re-announce interval from an announce response.
pub mod announce_interval;

/// Announce request payload.
pub mod announce_request;

/// Announce response payload.
pub mod announce_response;

/// Server-issued connection id.
pub mod connection_id;

/// Connect request payload.
pub mod connect_request;

/// Connect response payload.
pub mod connect_response;

/// Error response payload.
pub mod error_response;

/// Transfer counters in announce requests.
pub mod number_of_bytes;

/// Peer/seeder/leecher counts.
pub mod number_of_peers;

/// Random key field of an announce request.
pub mod peer_key;

/// Port field.
pub mod port;

/// Client-chosen transaction id.
pub mod transaction_id;
