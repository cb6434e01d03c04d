//! Outbound UDP tracker client.
//!
//! One call to [`structs::tracker_client::TrackerClient::query`] performs a
//! complete connect + announce round trip against one endpoint: a fresh
//! socket, a fresh handshake, one announce, socket dropped. The whole call
//! runs under a single deadline and is never retried here; retry policy
//! lives in the scheduler, which simply re-claims the torrent on a later
//! pass.

/// Query error taxonomy.
pub mod enums;

/// Client implementation.
pub mod impls;

/// Client data structures.
pub mod structs;
