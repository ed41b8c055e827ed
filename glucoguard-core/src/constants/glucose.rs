//! Glucose Band Thresholds
//!
//! Morning (fasting) blood-glucose thresholds in mg/dL. Every band edge used
//! by the classifier and the trend colors lives here so the two can never
//! disagree.

// ===== EMERGENCY BANDS =====

/// Readings strictly below this are a critical low.
///
/// Below 40 mg/dL the user needs fast-acting sugar and medical help, not
/// daily guidance.
pub const CRITICAL_LOW_BELOW_MG_DL: u32 = 40;

/// Readings strictly above this are an extreme high.
pub const EXTREME_HIGH_ABOVE_MG_DL: u32 = 400;

// ===== GUIDANCE BANDS =====

/// Readings strictly below this are LOW.
pub const LOW_BELOW_MG_DL: u32 = 70;

/// Upper edge of the NORMAL band, inclusive.
///
/// 70..=100 is the only band closed on both ends.
pub const NORMAL_MAX_MG_DL: u32 = 100;

/// Upper edge of the BORDERLINE band, inclusive.
///
/// Anything above this (up to the extreme-high edge) is HIGH.
pub const BORDERLINE_MAX_MG_DL: u32 = 125;

// ===== INPUT DOMAIN =====

/// Largest value the entry form offers.
///
/// The form starts at zero, which validation rejects.
pub const FORM_MAX_MG_DL: i64 = 600;

/// Fixed disclaimer attached to every guidance rendering.
pub const DISCLAIMER: &str = "general guidance only, does not replace medical advice";
