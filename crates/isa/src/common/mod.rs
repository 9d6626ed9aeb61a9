//! Common types shared across the instruction table.
//!
//! The table has one failure mode at lookup time (a miss, answered with the
//! illegal-instruction sentinel) and a handful at construction time. The latter
//! are the typed errors defined here.

/// Error types for record, table and configuration construction.
pub mod error;

pub use error::{ConfigError, EntryError, TableError};
