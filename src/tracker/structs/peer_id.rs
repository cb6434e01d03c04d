//! Client identifier sent in announce requests.

/// A 20-byte peer id.
///
/// The crawler never participates in a swarm, so the id only exists to fill
/// the announce packet: a configured client prefix followed by random
/// digits, regenerated for every query.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerId(pub [u8; 20]);
