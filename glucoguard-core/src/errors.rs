//! Error Types for Reading Validation and History Storage
//!
//! ## Error Categories
//!
//! Errors fall into two categories with very different recovery paths:
//!
//! ### Invalid Input (`ValidationError`)
//! - `NonPositive`: a glucose reading of zero or below
//! - `OutOfRange`: a reading above the form's upper limit
//!
//! The user can correct these. A submission that fails validation stops
//! immediately: nothing is written to history and nothing is classified.
//!
//! ### Storage Failures (`StorageError`)
//! - `Io`: the log file could not be opened, read or written
//! - `Csv`: the CSV layer rejected a row
//! - `MalformedRow`: a row parsed but carries an impossible value
//! - `Persist`: the atomic rename of the rewritten log failed
//!
//! These are environment problems. They are reported to the caller but never
//! stop the current reading from being classified.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use glucoguard_core::{GlucoseValidator, ValidationError, Validator};
//!
//! let validator = GlucoseValidator::default();
//! match validator.validate(0) {
//!     Ok(value) => println!("accepted {value} mg/dL"),
//!     Err(ValidationError::NonPositive { .. }) => {
//!         // Ask the user to re-enter the number
//!     }
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for history storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Invalid user input. Never persisted, never classified.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Glucose cannot be zero or negative
    #[error("Invalid input: glucose must be above zero, got {value}")]
    NonPositive {
        /// The rejected raw value
        value: i64,
    },

    /// Value above the accepted form domain
    #[error("Invalid input: {value} mg/dL outside range [{min}, {max}]")]
    OutOfRange {
        /// The rejected raw value
        value: i64,
        /// Smallest accepted value
        min: i64,
        /// Largest accepted value
        max: i64,
    },
}

/// Failures of the durable history log
#[derive(Error, Debug)]
pub enum StorageError {
    /// Filesystem-level failure
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failure
    #[cfg(feature = "store-csv")]
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Row decoded but violates the reading invariants
    #[error("Malformed history row {row}: {reason}")]
    MalformedRow {
        /// 1-based data row index (header excluded)
        row: usize,
        /// What was wrong with it
        reason: String,
    },

    /// Atomic replace of the log file failed
    #[cfg(feature = "store-csv")]
    #[error(transparent)]
    Persist(#[from] tempfile::PersistError),
}

impl ValidationError {
    /// The raw value that was rejected
    pub fn value(&self) -> i64 {
        match self {
            Self::NonPositive { value } | Self::OutOfRange { value, .. } => *value,
        }
    }
}
