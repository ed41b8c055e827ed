//! Memory-based history for testing and replay
//!
//! Useful for:
//! - Unit testing the tracker without touching disk
//! - Replaying recorded readings
//! - Simulating a store that cannot be written

use std::io;

use crate::errors::{StorageError, StorageResult};
use crate::traits::{HistoryStore, Reading};

/// In-memory history log
///
/// ## Example
///
/// ```rust
/// use glucoguard_core::history::{HistoryStore, MemoryHistoryStore, Reading};
/// use glucoguard_core::trend::DeltaInsight;
/// use chrono::NaiveDate;
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let mut store = MemoryHistoryStore::new();
/// store.append(Reading::new(day.and_hms_opt(7, 0, 0).unwrap(), 90)).unwrap();
///
/// assert_eq!(store.latest_delta().unwrap(), DeltaInsight::FirstEntry);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    readings: Vec<Reading>,
    /// Reject every append, leaving the log untouched
    fail_writes: bool,
}

impl MemoryHistoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from previously recorded readings, oldest first
    pub fn from_readings(readings: Vec<Reading>) -> Self {
        Self {
            readings,
            fail_writes: false,
        }
    }

    /// Make every subsequent append fail with a permission error
    pub fn fail_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Borrow the stored readings
    pub fn readings(&self) -> &[Reading] {
        &self.readings
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn append(&mut self, reading: Reading) -> StorageResult<()> {
        if self.fail_writes {
            return Err(StorageError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "history store is read-only",
            )));
        }

        self.readings.push(reading);
        Ok(())
    }

    fn read_all(&self) -> StorageResult<Vec<Reading>> {
        Ok(self.readings.clone())
    }

    fn len(&self) -> StorageResult<usize> {
        Ok(self.readings.len())
    }
}
