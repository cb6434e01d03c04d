use std::time::Duration;
use async_trait::async_trait;
use log::{debug, error, warn};
use redis::FromRedisValue;
use crate::reporting::traits::peer_reporter::PeerReporter;
use crate::store::errors::StoreError;
use crate::store::structs::store_connector::StoreConnector;
use crate::store::traits::ranking_store::RankingStore;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_address::PeerAddress;

/// Delay between retries of a failed store command.
pub const STORE_RETRY_DELAY: Duration = Duration::from_secs(1);

impl StoreConnector {
    pub async fn connect(url: &str, prefix: &str) -> Result<Self, StoreError> {
        let client = redis::Client::open(url)
            .map_err(|e| StoreError::ConnectionError(format!("Failed to create Redis client: {}", e)))?;
        let connection = client
            .get_connection_manager()
            .await
            .map_err(|e| StoreError::ConnectionError(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self {
            connection,
            prefix: prefix.to_string(),
        })
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        let mut conn = self.connection.clone();
        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(StoreError::RedisError)?;
        Ok(())
    }

    fn ranking_key(&self) -> String {
        format!("{}torrents", self.prefix)
    }

    fn trackers_key(&self, info_hash: &InfoHash) -> String {
        format!("{}torrents.{}.trackers", self.prefix, info_hash)
    }

    fn seen_peers_key(&self, info_hash: &InfoHash) -> String {
        format!("{}torrents.{}.peers", self.prefix, info_hash)
    }

    fn processed_key(&self, info_hash: &InfoHash) -> String {
        format!("{}torrents.{}.processed", self.prefix, info_hash)
    }

    fn census_key(&self) -> String {
        format!("{}peers", self.prefix)
    }

    /// Runs one command, retrying the same command until the store answers.
    async fn run<T: FromRedisValue>(&self, cmd: &redis::Cmd) -> T {
        loop {
            let mut conn = self.connection.clone();
            match cmd.query_async::<T>(&mut conn).await {
                Ok(value) => return value,
                Err(e) => {
                    error!(
                        "[STORE] Command failed, retrying in {}s: {}",
                        STORE_RETRY_DELAY.as_secs(),
                        e
                    );
                    tokio::time::sleep(STORE_RETRY_DELAY).await;
                }
            }
        }
    }
}

#[async_trait]
impl RankingStore for StoreConnector {
    async fn top_by_score_desc(&self, limit: usize) -> Vec<(InfoHash, f64)> {
        let mut cmd = redis::cmd("ZREVRANGEBYSCORE");
        cmd.arg(self.ranking_key())
            .arg("+inf")
            .arg("(0")
            .arg("WITHSCORES")
            .arg("LIMIT")
            .arg(0)
            .arg(limit as i64);
        let members: Vec<(String, f64)> = self.run(&cmd).await;

        let mut ranked = Vec::with_capacity(members.len());
        for (member, score) in members {
            match member.parse::<InfoHash>() {
                Ok(info_hash) => ranked.push((info_hash, score)),
                Err(_) => {
                    warn!("[STORE] Skipping unparsable ranking member {}", member);
                }
            }
        }
        ranked
    }

    async fn set_score(&self, info_hash: &InfoHash, score: f64) {
        // XX: only update existing members, so an evicted or never-ingested
        // torrent cannot be brought back by a late write.
        let mut cmd = redis::cmd("ZADD");
        cmd.arg(self.ranking_key())
            .arg("XX")
            .arg(score)
            .arg(info_hash.to_string());
        self.run::<()>(&cmd).await;
    }

    async fn remove_from_ranking(&self, info_hash: &InfoHash) {
        let mut cmd = redis::cmd("ZREM");
        cmd.arg(self.ranking_key()).arg(info_hash.to_string());
        self.run::<()>(&cmd).await;
        debug!("[STORE] Evicted {} from the ranking", info_hash);
    }

    async fn tracker_set(&self, info_hash: &InfoHash) -> Vec<String> {
        let mut cmd = redis::cmd("SMEMBERS");
        cmd.arg(self.trackers_key(info_hash));
        self.run(&cmd).await
    }

    async fn add_tracker(&self, info_hash: &InfoHash, url: &str) {
        let mut cmd = redis::cmd("SADD");
        cmd.arg(self.trackers_key(info_hash)).arg(url);
        self.run::<()>(&cmd).await;
    }

    async fn remove_tracker(&self, info_hash: &InfoHash, url: &str) {
        let mut cmd = redis::cmd("SREM");
        cmd.arg(self.trackers_key(info_hash)).arg(url);
        self.run::<()>(&cmd).await;
        debug!("[STORE] Removed tracker {} for {}", url, info_hash);
    }

    async fn mark_processed(&self, info_hash: &InfoHash, ttl: u64) -> bool {
        let mut cmd = redis::cmd("SET");
        cmd.arg(self.processed_key(info_hash))
            .arg(chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string())
            .arg("NX")
            .arg("EX")
            .arg(ttl);
        let reply: Option<String> = self.run(&cmd).await;
        reply.is_some()
    }
}

#[async_trait]
impl PeerReporter for StoreConnector {
    async fn report_peer(&self, peer: &PeerAddress, info_hash: &InfoHash) -> bool {
        let mut cmd = redis::cmd("SADD");
        cmd.arg(self.seen_peers_key(info_hash)).arg(peer.to_string());
        let added: i64 = self.run(&cmd).await;

        // global census set, detail consumed by the external metrics side
        let mut census = redis::cmd("SADD");
        census.arg(self.census_key()).arg(peer.ip.to_string());
        self.run::<i64>(&census).await;

        added == 1
    }
}
