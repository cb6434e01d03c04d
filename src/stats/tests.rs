#[cfg(test)]
mod stats_tests {
    use std::sync::Arc;
    use std::time::Duration;
    use crate::stats::enums::stats_event::StatsEvent;
    use crate::stats::structs::stats_atomics::StatsAtomics;
    use crate::stats::structs::stats_channel::StatsChannel;

    #[test]
    fn test_apply_and_snapshot() {
        let stats = StatsAtomics::new();
        stats.apply(StatsEvent::QueriesHandled, 3);
        stats.apply(StatsEvent::QueriesHandled, 2);
        stats.apply(StatsEvent::PeersNew, 7);
        stats.apply(StatsEvent::PeersNew, -2);

        let snapshot = stats.get_stats();
        assert_eq!(snapshot.queries_handled, 5);
        assert_eq!(snapshot.peers_new, 5);
        assert_eq!(snapshot.torrents_processed, 0);
    }

    #[tokio::test]
    async fn test_channel_drains_into_counters() {
        let stats = Arc::new(StatsAtomics::new());
        let channel = StatsChannel::open(stats.clone());

        channel.emit(StatsEvent::TorrentsProcessed, 1);
        channel.emit(StatsEvent::TrackersPruned, 4);

        // the drain task runs on the same runtime; give it a moment
        for _ in 0..50 {
            if stats.get_stats().trackers_pruned == 4 {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }

        let snapshot = stats.get_stats();
        assert_eq!(snapshot.torrents_processed, 1);
        assert_eq!(snapshot.trackers_pruned, 4);
    }
}
