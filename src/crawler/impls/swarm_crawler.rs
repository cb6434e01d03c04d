use std::sync::Arc;
use crate::client::structs::tracker_client::TrackerClient;
use crate::config::structs::configuration::Configuration;
use crate::crawler::structs::claimed_torrent::ClaimedTorrent;
use crate::crawler::structs::swarm_crawler::SwarmCrawler;
use crate::reporting::traits::peer_reporter::PeerReporter;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::structs::stats_channel::StatsChannel;
use crate::store::traits::ranking_store::RankingStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracker_catalog::TrackerCatalog;

impl SwarmCrawler {
    pub fn new(
        config: Arc<Configuration>,
        store: Arc<dyn RankingStore>,
        reporter: Arc<dyn PeerReporter>,
    ) -> SwarmCrawler {
        let stats = Arc::new(StatsAtomics::new());
        SwarmCrawler {
            catalog: TrackerCatalog::from_config(&config.tracker_catalog),
            client: TrackerClient::new(&config.crawler_config),
            store,
            reporter,
            stats_channel: StatsChannel::open(stats.clone()),
            stats,
            config,
        }
    }

    /// Claims up to `limit` torrents: the stored score is zeroed before
    /// the torrent is handed to any worker, so a torrent in flight cannot
    /// be claimed again. Claiming an id the ranking no longer holds is a
    /// no-op on the store side.
    pub async fn claim_batch(&self, limit: usize) -> Vec<ClaimedTorrent> {
        let ranked = self.store.top_by_score_desc(limit).await;
        let mut claimed = Vec::with_capacity(ranked.len());
        for (info_hash, score) in ranked {
            self.store.set_score(&info_hash, 0.0).await;
            claimed.push(ClaimedTorrent { info_hash, score });
        }
        claimed
    }

    /// Returns the torrent's tracker set, seeding it with the full catalog
    /// first when it is empty: both for torrents never seen before and
    /// for torrents whose set was pruned down to nothing.
    pub async fn load_or_seed_trackers(&self, info_hash: &InfoHash) -> Vec<String> {
        let stored = self.store.tracker_set(info_hash).await;
        if !stored.is_empty() {
            return stored;
        }
        let mut seeded = Vec::with_capacity(self.catalog.len());
        for endpoint in self.catalog.endpoints() {
            self.store.add_tracker(info_hash, endpoint.url.as_str()).await;
            seeded.push(endpoint.url.as_str().to_string());
        }
        self.stats_channel.emit(StatsEvent::TrackersSeeded, seeded.len() as i64);
        seeded
    }
}
