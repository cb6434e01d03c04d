use std::sync::Arc;
use std::time::Duration;
use futures_util::future::join_all;
use log::{debug, error, info};
use tokio::sync::watch;
use crate::crawler::structs::swarm_crawler::SwarmCrawler;

impl SwarmCrawler {
    /// The outer crawl loop. Runs passes until the shutdown flag flips;
    /// an in-flight pass always completes before the loop exits.
    pub async fn run(self: Arc<Self>, mut shutdown_rx: watch::Receiver<bool>) {
        let worker_count = self.config.crawler_config.worker_count;
        let pass_interval = Duration::from_secs(self.config.crawler_config.pass_interval);
        info!("[CRAWL] Starting scheduler with a pool of {worker_count} workers");

        loop {
            if *shutdown_rx.borrow() {
                info!("[CRAWL] Shutdown requested, stopping scheduler");
                return;
            }
            self.clone().run_pass(worker_count, pass_interval, &mut shutdown_rx).await;
        }
    }

    /// One pass: claim, dispatch, pace, barrier.
    ///
    /// An empty claim batch is not an error, the ranking may simply be
    /// drained; the pass just paces and the loop tries again.
    async fn run_pass(
        self: Arc<Self>,
        worker_count: usize,
        pass_interval: Duration,
        shutdown_rx: &mut watch::Receiver<bool>,
    ) {
        let claimed = self.claim_batch(worker_count).await;
        let dispatched = claimed.len();

        let mut handles = Vec::with_capacity(dispatched);
        for torrent in claimed {
            let crawler = self.clone();
            handles.push(tokio::spawn(async move {
                crawler.process_torrent(torrent).await;
            }));
        }

        tokio::select! {
            _ = tokio::time::sleep(pass_interval) => {}
            _ = shutdown_rx.changed() => {}
        }

        // barrier: the next pass must not start claiming while any worker
        // from this one still owns a torrent
        for finished in join_all(handles).await {
            if let Err(e) = finished {
                error!("[CRAWL] Worker aborted: {e}");
            }
        }

        if dispatched > 0 {
            debug!("[CRAWL] Pass complete, {dispatched} torrents processed");
        }
    }
}
