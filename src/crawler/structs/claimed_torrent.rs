use crate::tracker::structs::info_hash::InfoHash;

/// In-memory copy of a torrent for the duration of one pass.
///
/// `score` is the value the torrent held BEFORE it was claimed; the
/// stored score is already zeroed by then. The worker compounds the
/// multipliers onto this copy and writes the result back at the end.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct ClaimedTorrent {
    pub info_hash: InfoHash,
    pub score: f64,
}
