use async_trait::async_trait;
use crate::tracker::structs::info_hash::InfoHash;

/// Access to the score ranking and the per-torrent tracker sets.
///
/// Implementations retry until the store responds, so callers never see a
/// store error, they only block. The crawl logic is written against this
/// trait so tests can run on an in-memory store.
#[async_trait]
pub trait RankingStore: Send + Sync {
    /// Returns up to `limit` torrents by descending score, zero scores
    /// excluded so a claimed (or crashed) torrent is not handed out again.
    async fn top_by_score_desc(&self, limit: usize) -> Vec<(InfoHash, f64)>;

    /// Writes a score for a torrent already present in the ranking.
    /// Updating an absent torrent is a silent no-op: claiming an id that
    /// was evicted in the meantime must not resurrect it.
    async fn set_score(&self, info_hash: &InfoHash, score: f64);

    /// Evicts a torrent from the ranking entirely.
    async fn remove_from_ranking(&self, info_hash: &InfoHash);

    /// Returns the stored tracker set for a torrent; empty when unseeded.
    async fn tracker_set(&self, info_hash: &InfoHash) -> Vec<String>;

    async fn add_tracker(&self, info_hash: &InfoHash, url: &str);

    async fn remove_tracker(&self, info_hash: &InfoHash, url: &str);

    /// Sets the "recently processed" marker unless one is already live.
    /// Returns whether this call created it.
    async fn mark_processed(&self, info_hash: &InfoHash, ttl: u64) -> bool;
}
