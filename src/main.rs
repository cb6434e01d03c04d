use std::process::exit;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use log::{error, info};
use tokio::runtime::Builder;
use tokio_shutdown::Shutdown;
use swarmwatch::config::structs::configuration::Configuration;
use swarmwatch::crawler::structs::swarm_crawler::SwarmCrawler;
use swarmwatch::logging::setup_logging;
use swarmwatch::stats::structs::stats::Stats;
use swarmwatch::store::structs::store_connector::StoreConnector;
use swarmwatch::structs::Cli;

fn main() -> std::io::Result<()>
{
    let args = Cli::parse();

    let config = match Configuration::load_from_file(args.create_config) {
        Ok(config) => Arc::new(config),
        Err(_) => exit(101)
    };

    setup_logging(&config);

    info!("{} - Version: {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let store = match StoreConnector::connect(
                &config.store_config.address,
                &config.store_config.prefix
            ).await {
                Ok(store) => store,
                Err(e) => {
                    error!("Could not connect to the ranking store: {e}");
                    exit(1);
                }
            };
            if let Err(e) = store.ping().await {
                error!("Ranking store did not answer a ping: {e}");
                exit(1);
            }
            info!("[BOOT] Connected to the ranking store at {}", config.store_config.address);

            let store = Arc::new(store);
            let crawler = Arc::new(SwarmCrawler::new(config.clone(), store.clone(), store));
            if crawler.catalog.is_empty() {
                error!("The tracker catalog is empty, nothing to crawl against");
                exit(1);
            }
            info!("[BOOT] Catalog holds {} tracker endpoints", crawler.catalog.len());

            let tokio_shutdown = Shutdown::new().expect("shutdown creation works on first call");

            let stats_handler = tokio_shutdown.clone();
            let crawler_spawn_stats = crawler.clone();
            let console_interval = config.log_console_interval;
            info!("[BOOT] Starting thread for console updates with {console_interval} seconds delay...");

            tokio::spawn(async move {
                let mut interval = tokio::time::interval(Duration::from_secs(console_interval));
                let mut last: Option<(i64, Stats)> = None;
                loop {
                    tokio::select! {
                        _ = interval.tick() => {
                            let stats = crawler_spawn_stats.stats.get_stats();
                            let now = chrono::Utc::now().timestamp();

                            let (torrents_ps, peers_ps) = if let Some((then, previous)) = last {
                                let dt = (now - then).max(1);
                                (
                                    (stats.torrents_processed - previous.torrents_processed) / dt,
                                    (stats.peers_new - previous.peers_new) / dt,
                                )
                            } else { (0, 0) };
                            last = Some((now, stats));

                            info!(
                                "[STATS] Processed: {} ({}/s) - Evicted: {} | Queries OK: {} Failed: {} Timeout: {} | \
                                Peers: {} New: {} ({}/s) | Trackers Seeded: {} Pruned: {}",
                                stats.torrents_processed, torrents_ps, stats.torrents_evicted,
                                stats.queries_handled, stats.query_failures, stats.query_timeouts,
                                stats.peers_seen, stats.peers_new, peers_ps,
                                stats.trackers_seeded, stats.trackers_pruned
                            );
                        }
                        _ = stats_handler.handle() => {
                            info!("[BOOT] Shutting down thread for console updates...");
                            return;
                        }
                    }
                }
            });

            let (crawl_tx, crawl_rx) = tokio::sync::watch::channel(false);
            let crawler_spawn = crawler.clone();
            let crawl_handle = tokio::spawn(async move {
                crawler_spawn.run(crawl_rx).await;
            });

            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown request received, shutting down...");

                    let _ = crawl_tx.send(true);
                    if let Err(e) = crawl_handle.await {
                        error!("Scheduler did not stop cleanly: {e}");
                    }

                    tokio_shutdown.handle().await;
                    tokio::time::sleep(Duration::from_secs(1)).await;

                    info!("Crawler shutting down completed");
                    Ok(())
                }
            }
        })
}
