/// Point-in-time copy of the counters, for the console loop.
#[derive(Clone, Copy, Debug)]
pub struct Stats {
    pub started: i64,
    pub torrents_processed: i64,
    pub torrents_evicted: i64,
    pub queries_handled: i64,
    pub query_failures: i64,
    pub query_timeouts: i64,
    pub peers_seen: i64,
    pub peers_new: i64,
    pub trackers_pruned: i64,
    pub trackers_seeded: i64,
}
