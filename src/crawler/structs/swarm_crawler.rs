use std::sync::Arc;
use crate::client::structs::tracker_client::TrackerClient;
use crate::config::structs::configuration::Configuration;
use crate::reporting::traits::peer_reporter::PeerReporter;
use crate::stats::structs::stats_atomics::StatsAtomics;
use crate::stats::structs::stats_channel::StatsChannel;
use crate::store::traits::ranking_store::RankingStore;
use crate::tracker::structs::tracker_catalog::TrackerCatalog;

/// The crawler context, built once at boot and shared by every worker.
///
/// All collaborators are explicit: the protocol client, the tracker
/// catalog, the ranking store and the peer reporter come in through the
/// constructor, nothing is reached through globals.
pub struct SwarmCrawler {
    pub config: Arc<Configuration>,
    pub catalog: TrackerCatalog,
    pub client: TrackerClient,
    pub store: Arc<dyn RankingStore>,
    pub reporter: Arc<dyn PeerReporter>,
    pub stats: Arc<StatsAtomics>,
    pub stats_channel: StatsChannel,
}
