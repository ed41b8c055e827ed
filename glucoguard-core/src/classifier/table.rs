//! Band rule table and the static advice attached to each band
//!
//! Rows are evaluated top to bottom and the first match wins. Emergency
//! rows come first, which is what lets every interior row test only its
//! upper edge: once rows 1 and 2 fail, `value >= 40` and `value <= 400`.

use crate::constants::glucose::{
    BORDERLINE_MAX_MG_DL, CRITICAL_LOW_BELOW_MG_DL, EXTREME_HIGH_ABOVE_MG_DL,
    LOW_BELOW_MG_DL, NORMAL_MAX_MG_DL,
};

use super::{Band, EmergencyKind, EmergencyNotice, GuidanceBundle, SeverityMarker, Status};

/// One ordered predicate
#[derive(Clone, Copy)]
pub struct BandRule {
    /// Band assigned when `matches` holds
    pub band: Band,
    /// Predicate over the reading in mg/dL
    pub matches: fn(u32) -> bool,
}

/// Priority-ordered band rules. The last row is a catch-all.
pub const BAND_TABLE: [BandRule; 6] = [
    BandRule { band: Band::CriticalLow, matches: |v| v < CRITICAL_LOW_BELOW_MG_DL },
    BandRule { band: Band::ExtremeHigh, matches: |v| v > EXTREME_HIGH_ABOVE_MG_DL },
    BandRule { band: Band::Low, matches: |v| v < LOW_BELOW_MG_DL },
    BandRule { band: Band::Normal, matches: |v| v <= NORMAL_MAX_MG_DL },
    BandRule { band: Band::Borderline, matches: |v| v <= BORDERLINE_MAX_MG_DL },
    BandRule { band: Band::High, matches: |_| true },
];

/// Resolve the band of a reading
pub fn band_for(value: u32) -> Band {
    BAND_TABLE
        .iter()
        .find(|rule| (rule.matches)(value))
        .map_or(Band::High, |rule| rule.band)
}

// ===== EMERGENCY NOTICES =====

pub(super) const CRITICAL_LOW_NOTICE: EmergencyNotice = EmergencyNotice {
    kind: EmergencyKind::CriticalLow,
    message: "take fast-acting sugar, seek medical help immediately",
    actions: &[
        "take juice or glucose",
        "see a doctor immediately",
        "do not walk or exercise",
    ],
};

pub(super) const EXTREME_HIGH_NOTICE: EmergencyNotice = EmergencyNotice {
    kind: EmergencyKind::ExtremeHigh,
    message: "seek medical attention immediately",
    actions: &["see a doctor immediately", "do not walk or exercise"],
};

// ===== DAILY GUIDANCE =====

pub(super) const LOW_GUIDANCE: GuidanceBundle = GuidanceBundle {
    status: Status::Low,
    severity_marker: SeverityMarker::Red,
    meaning: "below normal range",
    diet_do: &["quick sugar source"],
    diet_avoid: &[],
    activity: "avoid exercise, rest and monitor",
    focus: "restore safely",
};

pub(super) const NORMAL_GUIDANCE: GuidanceBundle = GuidanceBundle {
    status: Status::Normal,
    severity_marker: SeverityMarker::Green,
    meaning: "healthy normal range",
    diet_do: &["balanced home-cooked meals"],
    diet_avoid: &["excess sugar"],
    activity: "15–20 min light walk",
    focus: "maintain routine",
};

pub(super) const BORDERLINE_GUIDANCE: GuidanceBundle = GuidanceBundle {
    status: Status::Borderline,
    severity_marker: SeverityMarker::Yellow,
    meaning: "slightly above normal",
    diet_do: &["light meals"],
    diet_avoid: &["sugar and refined carbs"],
    activity: "20 min walk",
    focus: "improve control",
};

pub(super) const HIGH_GUIDANCE: GuidanceBundle = GuidanceBundle {
    status: Status::High,
    severity_marker: SeverityMarker::Red,
    meaning: "high today",
    diet_do: &["light home-cooked meals"],
    diet_avoid: &["sweets, sugary drinks, high-carb food"],
    activity: "25–30 min moderate walk",
    focus: "reduce safely",
};
