//! Property tests for the band table and the validator
//!
//! The bands must be exhaustive and mutually exclusive over every reading,
//! and the validator must never let a non-positive value through.

use glucoguard_core::{
    classifier::{band_for, classify, Band, ClassificationOutcome, EmergencyKind, Status, BAND_TABLE},
    constants::{BORDERLINE_MAX_MG_DL, CRITICAL_LOW_BELOW_MG_DL, EXTREME_HIGH_ABOVE_MG_DL},
    GlucoseValidator, TrendColor, ValidationError, Validator,
};
use proptest::prelude::*;

/// Band derived independently from interval arithmetic
fn reference_band(value: u32) -> Band {
    match value {
        0..=39 => Band::CriticalLow,
        40..=69 => Band::Low,
        70..=100 => Band::Normal,
        101..=125 => Band::Borderline,
        126..=400 => Band::High,
        _ => Band::ExtremeHigh,
    }
}

#[test]
fn every_form_value_has_exactly_one_band() {
    for value in 1..=600u32 {
        let emergency_rows = BAND_TABLE[..2].iter().filter(|r| (r.matches)(value)).count();
        let outcome = classify(value);

        // Emergency rows are disjoint, and an emergency never carries guidance
        assert!(emergency_rows <= 1, "{value}");
        assert_eq!(outcome.is_emergency(), emergency_rows == 1, "{value}");
        assert_eq!(outcome.guidance().is_some(), !outcome.is_emergency(), "{value}");
        assert_eq!(band_for(value), reference_band(value), "{value}");
    }
}

#[test]
fn boundary_exactness() {
    let cases: [(u32, Band); 10] = [
        (39, Band::CriticalLow),
        (40, Band::Low),
        (69, Band::Low),
        (70, Band::Normal),
        (100, Band::Normal),
        (101, Band::Borderline),
        (125, Band::Borderline),
        (126, Band::High),
        (400, Band::High),
        (401, Band::ExtremeHigh),
    ];

    for (value, band) in cases {
        assert_eq!(band_for(value), band, "classify({value})");
    }

    assert!(matches!(
        classify(CRITICAL_LOW_BELOW_MG_DL - 1),
        ClassificationOutcome::Emergency(n) if n.kind == EmergencyKind::CriticalLow
    ));
    assert!(matches!(
        classify(EXTREME_HIGH_ABOVE_MG_DL + 1),
        ClassificationOutcome::Emergency(n) if n.kind == EmergencyKind::ExtremeHigh
    ));
    assert!(matches!(
        classify(BORDERLINE_MAX_MG_DL),
        ClassificationOutcome::Guidance(g) if g.status == Status::Borderline
    ));
}

proptest! {
    #[test]
    fn band_matches_reference_beyond_form(value in any::<u32>()) {
        prop_assert_eq!(band_for(value), reference_band(value));
    }

    #[test]
    fn outcome_follows_band(value in 1u32..=600) {
        let band = band_for(value);
        prop_assert_eq!(classify(value), band.outcome());
        prop_assert_eq!(classify(value).is_emergency(), band.is_emergency());
    }

    #[test]
    fn trend_color_agrees_with_band(value in 1u32..=600) {
        let expected = match band_for(value) {
            Band::Normal => TrendColor::Green,
            Band::Borderline => TrendColor::Orange,
            _ => TrendColor::Red,
        };
        prop_assert_eq!(TrendColor::for_value(value), expected);
    }

    #[test]
    fn validator_rejects_non_positive(raw in i64::MIN..=0) {
        let validator = GlucoseValidator::default();
        prop_assert_eq!(validator.validate(raw), Err(ValidationError::NonPositive { value: raw }));
    }

    #[test]
    fn validator_passes_form_values_unchanged(raw in 1i64..=600) {
        let validator = GlucoseValidator::default();
        prop_assert_eq!(validator.validate(raw), Ok(raw as u32));
    }
}
