/// Seconds the tracker asks clients to wait before re-announcing.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct AnnounceInterval(pub i32);
