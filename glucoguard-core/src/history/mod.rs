//! Reading history
//!
//! The history log is the single source of truth for delta and trend
//! queries. It only ever grows.
//!
//! ## Module Organization
//!
//! - Core trait lives in [`crate::traits::HistoryStore`]
//! - `memory` - In-memory store for tests and replay
//! - `file` - Durable CSV file store (requires `store-csv`)

pub mod memory;

#[cfg(feature = "store-csv")]
pub mod file;

pub use memory::MemoryHistoryStore;

#[cfg(feature = "store-csv")]
pub use file::{CsvHistoryStore, CsvStoreStats};

// Re-export traits for convenience
pub use crate::traits::{HistoryStore, Reading};
