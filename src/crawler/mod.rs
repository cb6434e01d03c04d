//! Crawl scheduling.
//!
//! The scheduler runs an endless sequence of passes. Each pass claims the
//! highest-scored torrents from the ranking store (claiming zeroes the
//! stored score, so no other worker can pick the same torrent up), then
//! dispatches one worker task per torrent, paces, and barrier-waits for
//! all of them before the next pass begins. Passes never overlap, which
//! bounds in-flight work to the pool size.
//!
//! A worker owns its torrent for the whole pass: it walks the torrent's
//! tracker set strictly sequentially, queries each endpoint, compounds the
//! score multipliers, prunes unproductive endpoints, and writes the final
//! score back (or evicts the torrent once it falls through the floor).

/// Implementation blocks, split by concern.
pub mod impls;

/// Crawler data structures.
pub mod structs;
