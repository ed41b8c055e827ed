//! Wall-clock time for reading timestamps
//!
//! Readings are stamped when they are submitted. The clock is injected so
//! tests can pin it:
//! - System clock (local wall time)
//! - Fixed clock (tests, replays)

use chrono::{Duration, Local, NaiveDateTime, Timelike};

/// Source of wall-clock time
pub trait TimeSource {
    /// Current local time, truncated to whole seconds
    fn now(&self) -> NaiveDateTime;
}

/// Local system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    fn now(&self) -> NaiveDateTime {
        truncate_to_seconds(Local::now().naive_local())
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: NaiveDateTime,
}

impl FixedTime {
    /// Pin the clock at `timestamp`
    pub fn new(timestamp: NaiveDateTime) -> Self {
        Self {
            timestamp: truncate_to_seconds(timestamp),
        }
    }

    /// Move the clock forward
    pub fn advance_secs(&mut self, secs: i64) {
        self.timestamp += Duration::seconds(secs);
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> NaiveDateTime {
        self.timestamp
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }
}

/// Drop sub-second precision; the log stores seconds only
pub fn truncate_to_seconds(timestamp: NaiveDateTime) -> NaiveDateTime {
    timestamp.with_nanosecond(0).unwrap_or(timestamp)
}
