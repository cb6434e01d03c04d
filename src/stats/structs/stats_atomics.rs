use std::sync::atomic::AtomicI64;

/// The live counters. All updates go through the stats channel drain.
#[derive(Debug)]
pub struct StatsAtomics {
    pub started: AtomicI64,
    pub torrents_processed: AtomicI64,
    pub torrents_evicted: AtomicI64,
    pub queries_handled: AtomicI64,
    pub query_failures: AtomicI64,
    pub query_timeouts: AtomicI64,
    pub peers_seen: AtomicI64,
    pub peers_new: AtomicI64,
    pub trackers_pruned: AtomicI64,
    pub trackers_seeded: AtomicI64,
}
