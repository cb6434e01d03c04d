//! Statistics event types.

/// Everything the crawler counts.
#[derive(Debug, Clone, Copy)]
pub enum StatsEvent {
    TorrentsProcessed,
    TorrentsEvicted,
    QueriesHandled,
    QueryFailures,
    QueryTimeouts,
    PeersSeen,
    PeersNew,
    TrackersPruned,
    TrackersSeeded,
}
