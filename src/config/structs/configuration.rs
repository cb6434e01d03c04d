use serde::{Deserialize, Serialize};
use crate::config::structs::crawler_config::CrawlerConfig;
use crate::config::structs::store_config::StoreConfig;
use crate::config::structs::tracker_entry_config::TrackerEntryConfig;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub log_console_interval: u64,
    pub crawler_config: CrawlerConfig,
    pub store_config: StoreConfig,
    pub tracker_catalog: Vec<TrackerEntryConfig>,
}
