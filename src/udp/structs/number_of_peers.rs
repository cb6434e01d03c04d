/// A peer count field (seeders, leechers or peers wanted).
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct NumberOfPeers(pub i32);
