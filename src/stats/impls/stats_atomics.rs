use std::sync::atomic::{AtomicI64, Ordering};
use chrono::Utc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;

impl Default for StatsAtomics {
    fn default() -> Self {
        StatsAtomics::new()
    }
}

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        StatsAtomics {
            started: AtomicI64::new(Utc::now().timestamp()),
            torrents_processed: AtomicI64::new(0),
            torrents_evicted: AtomicI64::new(0),
            queries_handled: AtomicI64::new(0),
            query_failures: AtomicI64::new(0),
            query_timeouts: AtomicI64::new(0),
            peers_seen: AtomicI64::new(0),
            peers_new: AtomicI64::new(0),
            trackers_pruned: AtomicI64::new(0),
            trackers_seeded: AtomicI64::new(0),
        }
    }

    pub fn apply(&self, event: StatsEvent, value: i64) {
        let counter = match event {
            StatsEvent::TorrentsProcessed => &self.torrents_processed,
            StatsEvent::TorrentsEvicted => &self.torrents_evicted,
            StatsEvent::QueriesHandled => &self.queries_handled,
            StatsEvent::QueryFailures => &self.query_failures,
            StatsEvent::QueryTimeouts => &self.query_timeouts,
            StatsEvent::PeersSeen => &self.peers_seen,
            StatsEvent::PeersNew => &self.peers_new,
            StatsEvent::TrackersPruned => &self.trackers_pruned,
            StatsEvent::TrackersSeeded => &self.trackers_seeded,
        };
        if value > 0 { counter.fetch_add(value, Ordering::SeqCst); }
        if value < 0 { counter.fetch_sub(-value, Ordering::SeqCst); }
    }

    pub fn get_stats(&self) -> Stats {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            torrents_processed: self.torrents_processed.load(Ordering::SeqCst),
            torrents_evicted: self.torrents_evicted.load(Ordering::SeqCst),
            queries_handled: self.queries_handled.load(Ordering::SeqCst),
            query_failures: self.query_failures.load(Ordering::SeqCst),
            query_timeouts: self.query_timeouts.load(Ordering::SeqCst),
            peers_seen: self.peers_seen.load(Ordering::SeqCst),
            peers_new: self.peers_new.load(Ordering::SeqCst),
            trackers_pruned: self.trackers_pruned.load(Ordering::SeqCst),
            trackers_seeded: self.trackers_seeded.load(Ordering::SeqCst),
        }
    }
}
