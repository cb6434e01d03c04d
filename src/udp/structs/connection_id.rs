/// Server-issued 64-bit connection id, valid for one announce.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct ConnectionId(pub i64);
