//! BitTorrent info hash identifier.

/// A 20-byte BitTorrent info hash.
///
/// The info hash is the SHA-1 hash of the "info" dictionary in a torrent
/// file and uniquely identifies a swarm. The crawler stores and logs it in
/// its canonical form, a 40-character lowercase hex string.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
