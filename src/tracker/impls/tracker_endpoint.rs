use url::Url;
use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;

impl TrackerEndpoint {
    pub fn parse(url: &str, max_peer_count: u32) -> Result<TrackerEndpoint, url::ParseError> {
        let url = Url::parse(url)?;
        Ok(TrackerEndpoint {
            url,
            max_peer_count,
        })
    }
}
