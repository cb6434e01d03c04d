use log::{debug, info};
use crate::crawler::structs::claimed_torrent::ClaimedTorrent;
use crate::crawler::structs::swarm_crawler::SwarmCrawler;
use crate::reporting::traits::peer_reporter::PeerReporter;
use crate::scoring::enums::query_outcome::QueryOutcome;
use crate::scoring::structs::score_update::ScoreUpdate;
use crate::stats::enums::stats_event::StatsEvent;
use crate::store::traits::ranking_store::RankingStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::scrape_result::ScrapeResult;
use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;

impl SwarmCrawler {
    /// Crawls one claimed torrent: every endpoint still in its tracker
    /// set, strictly in sequence, compounding the score multiplier per
    /// outcome. Returns early when the compounded score falls through the
    /// floor and the torrent is evicted; otherwise the final score is
    /// written back once after the last endpoint.
    pub async fn process_torrent(&self, torrent: ClaimedTorrent) {
        let info_hash = torrent.info_hash;
        let score_floor = self.config.crawler_config.score_floor;
        let new_peer_ratio = self.config.crawler_config.new_peer_ratio;

        let mut score = torrent.score;
        for url in self.load_or_seed_trackers(&info_hash).await {
            let (outcome, max_peer_count) = self.query_endpoint(&info_hash, &url).await;
            let update = ScoreUpdate::evaluate(&outcome, max_peer_count, new_peer_ratio);

            if !update.keep_endpoint {
                self.store.remove_tracker(&info_hash, &url).await;
                self.stats_channel.emit(StatsEvent::TrackersPruned, 1);
            }

            score *= update.multiplier;
            if score < score_floor {
                debug!("[WORKER] Evicting {} at score {:e}", info_hash, score);
                self.store.remove_from_ranking(&info_hash).await;
                self.stats_channel.emit(StatsEvent::TorrentsEvicted, 1);
                return;
            }
        }

        self.store.set_score(&info_hash, score).await;

        let ttl = self.config.crawler_config.processed_ttl;
        if self.store.mark_processed(&info_hash, ttl).await {
            self.stats_channel.emit(StatsEvent::TorrentsProcessed, 1);
        }
    }

    /// One endpoint query, reduced to a scoring outcome plus the capacity
    /// the thresholds are judged against.
    async fn query_endpoint(&self, info_hash: &InfoHash, url: &str) -> (QueryOutcome, u32) {
        let default_capacity = self.config.crawler_config.default_max_peer_count;
        let endpoint = match self.catalog.resolve(url) {
            Some(endpoint) => endpoint.clone(),
            // a stored member the catalog no longer lists; query it with
            // the fallback capacity rather than dropping it unjudged
            None => match TrackerEndpoint::parse(url, default_capacity) {
                Ok(endpoint) => endpoint,
                Err(e) => {
                    debug!("[WORKER] Unparsable tracker {} for {}: {}", url, info_hash, e);
                    self.stats_channel.emit(StatsEvent::QueryFailures, 1);
                    return (QueryOutcome::Failed, default_capacity);
                }
            },
        };

        match self.client.query(info_hash, &endpoint).await {
            Ok(result) => {
                self.stats_channel.emit(StatsEvent::QueriesHandled, 1);
                let outcome = self.report_scrape(info_hash, &endpoint, &result).await;
                (outcome, endpoint.max_peer_count)
            }
            Err(e) => {
                debug!("[WORKER] Query {} for {} failed: {}", endpoint.url, info_hash, e);
                if e.is_timeout() {
                    self.stats_channel.emit(StatsEvent::QueryTimeouts, 1);
                } else {
                    self.stats_channel.emit(StatsEvent::QueryFailures, 1);
                }
                (QueryOutcome::Failed, endpoint.max_peer_count)
            }
        }
    }

    /// Feeds the returned peers to the reporting collaborator and counts
    /// the first sightings that drive the boost decision.
    async fn report_scrape(
        &self,
        info_hash: &InfoHash,
        endpoint: &TrackerEndpoint,
        result: &ScrapeResult,
    ) -> QueryOutcome {
        let mut new_peer_count = 0usize;
        for peer in &result.peers {
            if self.reporter.report_peer(peer, info_hash).await {
                new_peer_count += 1;
            }
        }

        self.stats_channel.emit(StatsEvent::PeersSeen, result.peers.len() as i64);
        self.stats_channel.emit(StatsEvent::PeersNew, new_peer_count as i64);

        if new_peer_count > 0 {
            info!(
                "[WORKER] P: {:03}/{:03} H: {} on {}",
                new_peer_count,
                result.peers.len(),
                info_hash,
                endpoint.url
            );
        }

        QueryOutcome::Scraped {
            peer_count: result.peers.len(),
            new_peer_count,
        }
    }
}
