use std::fmt;
use std::fmt::Formatter;
use rand::RngExt;
use crate::common::common::bin2hex;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl PeerId {
    /// Builds a fresh peer id from the configured client prefix padded
    /// with random ASCII digits. Prefixes longer than 20 bytes are cut.
    pub fn generate(prefix: &str) -> PeerId {
        let mut id = [0u8; 20];
        let prefix_bytes = prefix.as_bytes();
        let cut = prefix_bytes.len().min(20);
        id[..cut].copy_from_slice(&prefix_bytes[..cut]);
        let mut rng = rand::rng();
        for byte in id.iter_mut().skip(cut) {
            *byte = b'0' + rng.random_range(0..10u8);
        }
        PeerId(id)
    }
}
