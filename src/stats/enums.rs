//! Statistics event enumeration.

pub mod stats_event;
