//! Announce event codes (BEP 15).

/// The event field of an announce request. The crawler always announces
/// `None`: it observes swarms, it never joins them.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum AnnounceEvent {
    None,
    Completed,
    Started,
    Stopped,
}

impl AnnounceEvent {
    pub fn to_i32(self) -> i32 {
        match self {
            AnnounceEvent::None => 0,
            AnnounceEvent::Completed => 1,
            AnnounceEvent::Started => 2,
            AnnounceEvent::Stopped => 3,
        }
    }

    pub fn from_i32(value: i32) -> AnnounceEvent {
        match value {
            1 => AnnounceEvent::Completed,
            2 => AnnounceEvent::Started,
            3 => AnnounceEvent::Stopped,
            _ => AnnounceEvent::None,
        }
    }
}
