use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CrawlerConfig {
    /// Worker pool size; also the size of each claim batch.
    pub worker_count: usize,
    /// Seconds slept between dispatching a pass and waiting for it.
    pub pass_interval: u64,
    /// Whole-call deadline for one tracker query, in seconds.
    pub query_timeout: u64,
    /// num_want sent in announce requests.
    pub peers_wanted: i32,
    /// Client prefix of the synthesized peer id.
    pub peer_prefix: String,
    /// Fraction of an endpoint's capacity that must come back as fresh
    /// peers before a boost (strictly more than the rounded-down count).
    pub new_peer_ratio: f64,
    /// Scores below this are evicted from the ranking.
    pub score_floor: f64,
    /// Lifetime of the "recently processed" marker, in seconds.
    pub processed_ttl: u64,
    /// Capacity assumed for trackers missing from the catalog.
    pub default_max_peer_count: u32,
}
