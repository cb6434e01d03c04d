//! Query error taxonomy.

pub mod query_error;
