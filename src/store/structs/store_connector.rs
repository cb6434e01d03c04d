use redis::aio::ConnectionManager;

/// Redis-backed store connector.
///
/// The connection manager transparently re-establishes the link after a
/// failure; command-level retries live in the impl block.
#[derive(Clone)]
pub struct StoreConnector {
    pub(crate) connection: ConnectionManager,
    pub(crate) prefix: String,
}
