use std::sync::Arc;
use log::debug;
use tokio::sync::mpsc;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::structs::stats_channel::{StatsChannel, STATS_QUEUE_CAPACITY};

impl StatsChannel {
    /// Opens the channel and spawns the drain task applying events to the
    /// counters. The sender half is cheap to clone into every worker.
    pub fn open(stats: Arc<StatsAtomics>) -> StatsChannel {
        let (tx, mut rx) = mpsc::channel::<(StatsEvent, i64)>(STATS_QUEUE_CAPACITY);
        tokio::spawn(async move {
            while let Some((event, value)) = rx.recv().await {
                stats.apply(event, value);
            }
        });
        StatsChannel { tx }
    }

    /// Queues one counter update. Never blocks: on overflow the update is
    /// dropped and the crawl goes on uncounted.
    pub fn emit(&self, event: StatsEvent, value: i64) {
        if self.tx.try_send((event, value)).is_err() {
            debug!("[STATS] Queue full, dropping {:?}", event);
        }
    }
}
