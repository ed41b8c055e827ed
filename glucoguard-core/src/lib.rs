//! Classification and history engine for GlucoGuard
//!
//! Turns a morning blood-glucose reading into today's guidance and keeps an
//! append-only log of readings for delta and trend views.
//!
//! Key properties:
//! - Classification is a pure function of one value
//! - History is append-only; a failed append leaves the log untouched
//! - A storage failure never hides guidance for the current reading
//!
//! ```no_run
//! use glucoguard_core::{GlucoseTracker, history::CsvHistoryStore};
//!
//! let store = CsvHistoryStore::open("sugar_history.csv")?;
//! let mut tracker = GlucoseTracker::builder(store).build();
//!
//! match tracker.submit(112) {
//!     Ok(submission) => {}, // Render guidance
//!     Err(e) => {},         // Ask for a valid number
//! }
//! # Ok::<(), glucoguard_core::StorageError>(())
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

// Macros for optional logging
#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

pub mod classifier;
pub mod constants;
pub mod errors;
pub mod history;
pub mod time;
pub mod tracker;
pub mod traits;
pub mod trend;
pub mod validators;

// Public API
pub use classifier::{classify, Band, ClassificationOutcome, GuidanceBundle, EmergencyNotice};
pub use errors::{StorageError, StorageResult, ValidationError, ValidationResult};
pub use traits::{HistoryStore, Reading, Validator};
pub use tracker::{GlucoseTracker, Persistence, Submission, TrackerBuilder};
pub use trend::{DeltaInsight, Direction, TrendColor, TrendPoint};
pub use validators::GlucoseValidator;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
