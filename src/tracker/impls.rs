//! Implementation blocks for the domain types.

pub mod info_hash;
pub mod peer_address;
pub mod peer_id;
pub mod tracker_catalog;
pub mod tracker_endpoint;
