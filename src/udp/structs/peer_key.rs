/// Random key a client may send so trackers can recognize it across IP
/// changes. The crawler sends zero.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct PeerKey(pub u32);
