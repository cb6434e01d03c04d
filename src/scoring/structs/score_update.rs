/// The scoring verdict for one endpoint query.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ScoreUpdate {
    /// Applied to the score carried in from before this query.
    pub multiplier: f64,
    /// False removes the endpoint from this torrent's tracker set.
    pub keep_endpoint: bool,
}
