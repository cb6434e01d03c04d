/// What one tracker query produced, reduced to what scoring needs.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum QueryOutcome {
    /// Network, timeout or protocol failure; no response to trust.
    Failed,
    /// A response with its peer count and how many of those peers were
    /// first sightings for this torrent.
    Scraped {
        peer_count: usize,
        new_peer_count: usize,
    },
}
