use tokio::sync::mpsc::Sender;
use crate::stats::enums::stats_event::StatsEvent;

/// Events queued between a worker and the drain task.
pub const STATS_QUEUE_CAPACITY: usize = 4096;

/// Non-blocking sender half of the stats pipeline.
#[derive(Clone, Debug)]
pub struct StatsChannel {
    pub(crate) tx: Sender<(StatsEvent, i64)>,
}
