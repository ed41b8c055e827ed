//! History Log Layout
//!
//! Column names and formats of the persisted reading table.

/// Header of the timestamp column.
pub const DATETIME_COLUMN: &str = "datetime";

/// Header of the glucose value column.
pub const SUGAR_COLUMN: &str = "sugar";

/// Timestamp format, second precision.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Default history file name when no path is configured.
pub const DEFAULT_HISTORY_FILE: &str = "sugar_history.csv";

/// Number of readings shown in the trend chart by default.
pub const DEFAULT_TREND_WINDOW: usize = 7;
