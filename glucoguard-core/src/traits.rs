//! Core traits for validators and history stores
//!
//! These traits define the two seams of the tracker: how raw input is
//! checked, and where accepted readings are kept. Keep them small; the
//! classifier itself is a plain function and needs no trait.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::constants::storage::{DATETIME_COLUMN, SUGAR_COLUMN};
use crate::errors::{StorageResult, ValidationResult};
use crate::trend::{self, DeltaInsight};

/// Single glucose reading with its wall-clock timestamp
///
/// Field names match the persisted table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    /// Submission time, second precision
    #[serde(rename = "datetime", with = "datetime_format")]
    pub timestamp: NaiveDateTime,

    /// Glucose in mg/dL, always above zero once stored
    #[serde(rename = "sugar")]
    pub value: u32,
}

impl Reading {
    /// Create a reading
    pub fn new(timestamp: NaiveDateTime, value: u32) -> Self {
        Self { timestamp, value }
    }

    /// Column headers in persisted order
    pub const fn headers() -> [&'static str; 2] {
        [DATETIME_COLUMN, SUGAR_COLUMN]
    }
}

mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    use crate::constants::storage::DATETIME_FORMAT;

    pub fn serialize<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&timestamp.format(DATETIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(raw.trim(), DATETIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

/// Input validator trait
pub trait Validator {
    /// The raw type coming from the entry form
    type Raw;

    /// The checked type handed to the rest of the pipeline
    type Value;

    /// Validate a single raw input, returning it unchanged on success
    fn validate(&self, raw: Self::Raw) -> ValidationResult<Self::Value>;

    /// Get the accepted domain for this validator
    fn constraints(&self) -> ValidatorConstraints;
}

/// Accepted input domain for a validator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatorConstraints {
    /// Smallest accepted value
    pub min_value: i64,

    /// Largest accepted value
    pub max_value: i64,
}

/// Append-only, ordered log of readings
///
/// Insertion order is chronological order. Implementations never reorder,
/// edit or delete entries.
///
/// ## Preconditions
///
/// `append` takes `&mut self`, so one process cannot interleave two appends.
/// Several processes writing the same durable log at once is not supported.
pub trait HistoryStore {
    /// Append one reading to the end of the log
    ///
    /// All-or-nothing: on error the existing log is left untouched.
    fn append(&mut self, reading: Reading) -> StorageResult<()>;

    /// Every reading, oldest first. Empty when no log exists yet.
    fn read_all(&self) -> StorageResult<Vec<Reading>>;

    /// Compare the two most recently appended readings
    fn latest_delta(&self) -> StorageResult<DeltaInsight> {
        let readings = self.read_all()?;
        Ok(trend::compute_delta(&readings))
    }

    /// The last `min(n, len)` readings, oldest first
    fn recent_window(&self, n: usize) -> StorageResult<Vec<Reading>> {
        let mut readings = self.read_all()?;
        let start = readings.len().saturating_sub(n);
        Ok(readings.split_off(start))
    }

    /// Number of stored readings
    fn len(&self) -> StorageResult<usize> {
        Ok(self.read_all()?.len())
    }

    /// Check if nothing has been stored yet
    fn is_empty(&self) -> StorageResult<bool> {
        Ok(self.len()? == 0)
    }
}
