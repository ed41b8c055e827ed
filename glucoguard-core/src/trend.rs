//! Day-over-day delta and trend coloring
//!
//! Both are read-only views over the history log. Neither is stored: the
//! delta is recomputed from the two newest readings and each trend bar's
//! color from its value.

use core::fmt;

use serde::Serialize;

use crate::classifier::{band_for, Band};
use crate::traits::Reading;

/// Which way the latest reading moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Dropped since the previous reading
    Lower,
    /// Rose since the previous reading
    Higher,
    /// Unchanged
    Same,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Lower => "lower",
            Direction::Higher => "higher",
            Direction::Same => "same",
        })
    }
}

/// Latest reading compared with the one before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeltaInsight {
    /// Log is empty
    NoHistory,
    /// Exactly one reading so far
    FirstEntry,
    /// Two or more readings; compares the last two in log order
    Compared {
        /// Latest relative to previous
        direction: Direction,
        /// Absolute difference in mg/dL
        magnitude: u32,
    },
}

/// Compare the two most recently appended readings
///
/// Uses log order, never value order.
pub fn compute_delta(readings: &[Reading]) -> DeltaInsight {
    match readings {
        [] => DeltaInsight::NoHistory,
        [_] => DeltaInsight::FirstEntry,
        [.., previous, latest] => {
            let direction = match latest.value.cmp(&previous.value) {
                core::cmp::Ordering::Less => Direction::Lower,
                core::cmp::Ordering::Greater => Direction::Higher,
                core::cmp::Ordering::Equal => Direction::Same,
            };
            DeltaInsight::Compared {
                direction,
                magnitude: latest.value.abs_diff(previous.value),
            }
        }
    }
}

/// Three-color scheme for trend bars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendColor {
    /// Below 70 or above 125
    Red,
    /// Normal band
    Green,
    /// Borderline band
    Orange,
}

impl TrendColor {
    /// Color for a reading: `<70` red, `70..=100` green, `101..=125` orange,
    /// `>125` red
    pub fn for_value(value: u32) -> Self {
        match band_for(value) {
            Band::Normal => TrendColor::Green,
            Band::Borderline => TrendColor::Orange,
            Band::CriticalLow | Band::Low | Band::High | Band::ExtremeHigh => TrendColor::Red,
        }
    }
}

/// One bar of the trend chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    /// The charted reading
    #[serde(flatten)]
    pub reading: Reading,
    /// Bar color for its value
    pub color: TrendColor,
}

/// Pair each reading with its render-time color, preserving order
pub fn trend_points(readings: &[Reading]) -> Vec<TrendPoint> {
    readings
        .iter()
        .map(|&reading| TrendPoint {
            reading,
            color: TrendColor::for_value(reading.value),
        })
        .collect()
}
