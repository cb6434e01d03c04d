//! Common utilities shared across the crawler modules.
//!
//! Contains the hex conversion helpers used by the identifier newtypes
//! (`InfoHash`, `PeerId`) for display, parsing and logging.

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Unit tests for the common utilities.
pub mod tests;
