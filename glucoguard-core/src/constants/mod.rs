//! Constants for GlucoGuard Core
//!
//! Centralized numeric thresholds and layout constants. Always use these
//! instead of magic numbers; the classifier, trend colors and validator all
//! read their band edges from here.
//!
//! Constants are grouped by domain:
//! - **Glucose**: band thresholds and the input domain
//! - **Storage**: persisted table layout and defaults

/// Glucose band thresholds in mg/dL.
pub mod glucose;

/// History log layout and defaults.
pub mod storage;

// Re-export commonly used constants for convenience
pub use glucose::{
    CRITICAL_LOW_BELOW_MG_DL, EXTREME_HIGH_ABOVE_MG_DL,
    LOW_BELOW_MG_DL, NORMAL_MAX_MG_DL, BORDERLINE_MAX_MG_DL,
    FORM_MAX_MG_DL, DISCLAIMER,
};

pub use storage::{
    DATETIME_COLUMN, SUGAR_COLUMN, DATETIME_FORMAT,
    DEFAULT_HISTORY_FILE, DEFAULT_TREND_WINDOW,
};
