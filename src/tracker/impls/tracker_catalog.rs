use log::warn;
use crate::config::structs::tracker_entry_config::TrackerEntryConfig;
use crate::tracker::structs::tracker_catalog::TrackerCatalog;
use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;

impl TrackerCatalog {
    /// Builds the catalog from the configured entries. Entries whose URI
    /// does not parse are skipped with a warning rather than aborting boot.
    pub fn from_config(entries: &[TrackerEntryConfig]) -> TrackerCatalog {
        let mut endpoints = Vec::with_capacity(entries.len());
        for entry in entries {
            match TrackerEndpoint::parse(&entry.url, entry.max_peer_count) {
                Ok(endpoint) => endpoints.push(endpoint),
                Err(e) => {
                    warn!("[CATALOG] Skipping unparsable tracker {}: {}", entry.url, e);
                }
            }
        }
        TrackerCatalog { endpoints }
    }

    pub fn endpoints(&self) -> &[TrackerEndpoint] {
        &self.endpoints
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Looks up the catalog entry matching a stored tracker set member.
    pub fn resolve(&self, url: &str) -> Option<&TrackerEndpoint> {
        self.endpoints.iter().find(|endpoint| endpoint.url.as_str() == url)
    }
}
