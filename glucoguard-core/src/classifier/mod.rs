//! Glucose Classification
//!
//! ## Overview
//!
//! Maps one validated reading to what the user should do today. The mapping
//! is a pure, total function of the value: no history, no clock, no I/O.
//!
//! ## Bands
//!
//! ```text
//! mg/dL   0 ──── 40 ──── 70 ═════ 100 ──── 125 ───────── 400 ────
//!         │ CRIT │  LOW  │ NORMAL  │ BORDER │    HIGH      │ EXTREME
//!         │ LOW  │       │ (both   │ LINE   │              │ HIGH
//!         │      │       │  edges) │        │              │
//! ```
//!
//! The two emergency bands short-circuit: they produce an
//! [`EmergencyNotice`] and no [`GuidanceBundle`].
//!
//! ## Rule Order
//!
//! Bands are resolved from a single ordered table (see [`table`]); the first
//! matching row wins. Emergencies are checked first, so each interior row
//! only needs its upper edge.
//!
//! ```rust
//! use glucoguard_core::classifier::{classify, ClassificationOutcome, Status};
//!
//! match classify(85) {
//!     ClassificationOutcome::Guidance(bundle) => assert_eq!(bundle.status, Status::Normal),
//!     ClassificationOutcome::Emergency(_) => unreachable!(),
//! }
//! ```

pub mod table;

use core::fmt;

use serde::Serialize;

pub use table::{band_for, BAND_TABLE};

/// One of the six value ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Band {
    /// Below 40 mg/dL, emergency
    CriticalLow,
    /// 40..70
    Low,
    /// 70..=100
    Normal,
    /// 101..=125
    Borderline,
    /// 126..=400
    High,
    /// Above 400 mg/dL, emergency
    ExtremeHigh,
}

impl Band {
    /// Every band, lowest first
    pub const ALL: [Band; 6] = [
        Band::CriticalLow,
        Band::Low,
        Band::Normal,
        Band::Borderline,
        Band::High,
        Band::ExtremeHigh,
    ];

    /// Check if this band bypasses daily guidance
    pub const fn is_emergency(&self) -> bool {
        matches!(self, Band::CriticalLow | Band::ExtremeHigh)
    }

    /// Outcome for any reading in this band
    pub fn outcome(&self) -> ClassificationOutcome {
        match self {
            Band::CriticalLow => ClassificationOutcome::Emergency(table::CRITICAL_LOW_NOTICE),
            Band::ExtremeHigh => ClassificationOutcome::Emergency(table::EXTREME_HIGH_NOTICE),
            Band::Low => ClassificationOutcome::Guidance(table::LOW_GUIDANCE),
            Band::Normal => ClassificationOutcome::Guidance(table::NORMAL_GUIDANCE),
            Band::Borderline => ClassificationOutcome::Guidance(table::BORDERLINE_GUIDANCE),
            Band::High => ClassificationOutcome::Guidance(table::HIGH_GUIDANCE),
        }
    }
}

/// Status shown in the guidance header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// 40..70
    Low,
    /// 70..=100
    Normal,
    /// 101..=125
    Borderline,
    /// 126..=400
    High,
}

impl Status {
    /// Header label
    pub const fn label(&self) -> &'static str {
        match self {
            Status::Low => "LOW",
            Status::Normal => "NORMAL",
            Status::Borderline => "BORDERLINE",
            Status::High => "HIGH",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Traffic-light marker next to the status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityMarker {
    /// Low or high
    Red,
    /// Borderline
    Yellow,
    /// Normal
    Green,
}

/// Which emergency band was hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EmergencyKind {
    /// Below 40 mg/dL
    CriticalLow,
    /// Above 400 mg/dL
    ExtremeHigh,
}

impl EmergencyKind {
    /// Notice title
    pub const fn title(&self) -> &'static str {
        match self {
            EmergencyKind::CriticalLow => "Critical Low Blood Sugar",
            EmergencyKind::ExtremeHigh => "Extremely High Blood Sugar",
        }
    }
}

/// Emergency short-circuit: no daily guidance, act now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmergencyNotice {
    /// Which emergency band was hit
    pub kind: EmergencyKind,
    /// One-line instruction shown under the title
    pub message: &'static str,
    /// Immediate steps, in order
    pub actions: &'static [&'static str],
}

/// Daily advice for a non-emergency reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuidanceBundle {
    /// Header status
    pub status: Status,
    /// Marker shown next to the status
    pub severity_marker: SeverityMarker,
    /// What the reading means
    pub meaning: &'static str,
    /// Foods to eat today, in order
    pub diet_do: &'static [&'static str],
    /// Foods to avoid today, may be empty
    pub diet_avoid: &'static [&'static str],
    /// Recommended activity
    pub activity: &'static str,
    /// Today's focus
    pub focus: &'static str,
}

/// Result of classifying one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "lowercase")]
pub enum ClassificationOutcome {
    /// Act now, no daily guidance
    Emergency(EmergencyNotice),
    /// Daily guidance for a non-emergency band
    Guidance(GuidanceBundle),
}

impl ClassificationOutcome {
    /// Guidance bundle, if this is not an emergency
    pub fn guidance(&self) -> Option<&GuidanceBundle> {
        match self {
            ClassificationOutcome::Guidance(bundle) => Some(bundle),
            ClassificationOutcome::Emergency(_) => None,
        }
    }

    /// Emergency notice, if any
    pub fn emergency(&self) -> Option<&EmergencyNotice> {
        match self {
            ClassificationOutcome::Emergency(notice) => Some(notice),
            ClassificationOutcome::Guidance(_) => None,
        }
    }

    /// Check if this is an emergency short-circuit
    pub fn is_emergency(&self) -> bool {
        self.emergency().is_some()
    }
}

/// Classify a reading
///
/// Total over every `u32`. Zero never gets here through the validator, but
/// classifies as a critical low all the same.
pub fn classify(value: u32) -> ClassificationOutcome {
    band_for(value).outcome()
}
