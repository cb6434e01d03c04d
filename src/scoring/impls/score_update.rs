use crate::scoring::enums::query_outcome::QueryOutcome;
use crate::scoring::structs::score_update::ScoreUpdate;
use crate::scoring::{BOOST_MULTIPLIER, FADE_MULTIPLIER, PENALTY_MULTIPLIER};

impl ScoreUpdate {
    /// Judges one query outcome against an endpoint's capacity.
    ///
    /// A boost requires BOTH a full peer list (`peer_count` at capacity)
    /// and strictly more first sightings than `max_peer_count *
    /// new_peer_ratio` rounded down. Anything less removes the endpoint:
    /// a tracker that stops producing fresh peers for a torrent is not
    /// asked about that torrent again until its set re-seeds.
    pub fn evaluate(outcome: &QueryOutcome, max_peer_count: u32, new_peer_ratio: f64) -> ScoreUpdate {
        match outcome {
            QueryOutcome::Failed => ScoreUpdate {
                multiplier: PENALTY_MULTIPLIER,
                keep_endpoint: false,
            },
            QueryOutcome::Scraped { peer_count: 0, .. } => ScoreUpdate {
                multiplier: PENALTY_MULTIPLIER,
                keep_endpoint: false,
            },
            QueryOutcome::Scraped { peer_count, new_peer_count } => {
                let peer_threshold = (max_peer_count as f64 * new_peer_ratio) as usize;
                let has_max_peers = *peer_count >= max_peer_count as usize;
                let has_enough_new_peers = *new_peer_count > peer_threshold;
                if has_max_peers && has_enough_new_peers {
                    ScoreUpdate {
                        multiplier: BOOST_MULTIPLIER,
                        keep_endpoint: true,
                    }
                } else {
                    ScoreUpdate {
                        multiplier: FADE_MULTIPLIER,
                        keep_endpoint: false,
                    }
                }
            }
        }
    }
}
