//! Crawler statistics.
//!
//! Atomic counters for everything worth watching on the console, fed
//! through a bounded best-effort channel: workers `emit` events without
//! ever blocking or failing, the drain task applies them to the counters,
//! and overflow simply drops updates. A stats outage can cost accuracy,
//! never scheduling or scoring correctness.

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for the counters and the channel.
pub mod impls;

/// Statistics data structures.
pub mod structs;

/// Unit tests for the statistics plumbing.
pub mod tests;
