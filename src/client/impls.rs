//! Client implementation.

pub mod tracker_client;
