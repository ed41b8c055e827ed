//! Common test utilities for integration tests
//!
//! This module provides:
//! - Deterministic timestamps and reading series
//! - A clock that steps one day per reading
//! - Pre-built week-long scenarios with expected outcomes

#![allow(dead_code)]

use std::cell::Cell;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use glucoguard_core::{time::TimeSource, Reading};

/// 07:30 on the given day of January 2024
pub fn morning(day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, day)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap()
}

/// One reading per morning, starting 2024-01-01
pub fn series(values: &[u32]) -> Vec<Reading> {
    values
        .iter()
        .enumerate()
        .map(|(day, &value)| Reading::new(morning(1) + Duration::days(day as i64), value))
        .collect()
}

/// Clock that returns the next morning on every call
pub struct DailyClock {
    next: Cell<NaiveDateTime>,
}

impl DailyClock {
    pub fn starting(at: NaiveDateTime) -> Self {
        Self { next: Cell::new(at) }
    }
}

impl TimeSource for DailyClock {
    fn now(&self) -> NaiveDateTime {
        let current = self.next.get();
        self.next.set(current + Duration::days(1));
        current
    }
}

/// Week of readings with the statuses a user should see
pub struct WeekScenario {
    pub name: &'static str,
    pub values: [i64; 7],
    pub expected_saved: usize,
    pub expected_rejected: usize,
    pub expected_emergencies: usize,
}

impl WeekScenario {
    pub fn standard_scenarios() -> Vec<Self> {
        vec![
            Self {
                name: "steady_normal_week",
                values: [88, 92, 90, 95, 87, 91, 93],
                expected_saved: 7,
                expected_rejected: 0,
                expected_emergencies: 0,
            },
            Self {
                name: "drifting_up",
                values: [98, 104, 112, 121, 130, 142, 155],
                expected_saved: 7,
                expected_rejected: 0,
                expected_emergencies: 0,
            },
            Self {
                name: "typos_and_hypo",
                values: [0, 85, -90, 35, 62, 75, 0],
                expected_saved: 4,
                expected_rejected: 3,
                expected_emergencies: 1,
            },
            Self {
                name: "extreme_spike",
                values: [180, 240, 410, 390, 600, 310, 220],
                expected_saved: 7,
                expected_rejected: 0,
                expected_emergencies: 2,
            },
        ]
    }
}
