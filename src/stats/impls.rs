//! Implementation blocks for the counters and the channel.

pub mod stats_atomics;
pub mod stats_channel;
