//! Peer reporting collaborator boundary.
//!
//! Each peer a tracker returns is handed to the reporting collaborator,
//! which answers one question the scorer needs: has this peer been seen for
//! this torrent before? Everything else the collaborator does with the
//! sighting (geolocation, census metrics) is opaque to the crawler core.

/// Reporting traits.
pub mod traits;
