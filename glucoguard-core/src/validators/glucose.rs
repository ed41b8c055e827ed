//! Glucose reading validator
//!
//! Validates morning readings based on:
//! - Positivity (glucose is never zero or below)
//! - The entry form's upper limit

use crate::{
    constants::glucose::FORM_MAX_MG_DL,
    errors::{ValidationError, ValidationResult},
    traits::{Validator, ValidatorConstraints},
};

use super::utils;

/// Validator for raw mg/dL form input
#[derive(Debug, Clone)]
pub struct GlucoseValidator {
    /// Largest accepted reading in mg/dL
    max_mg_dl: i64,
}

impl Default for GlucoseValidator {
    fn default() -> Self {
        Self {
            max_mg_dl: FORM_MAX_MG_DL,
        }
    }
}

impl GlucoseValidator {
    /// Create validator with a custom upper limit
    pub fn new_with_max(max: i64) -> Self {
        // A limit below 1 would reject every reading
        Self {
            max_mg_dl: max.max(1),
        }
    }
}

impl Validator for GlucoseValidator {
    type Raw = i64;
    type Value = u32;

    fn validate(&self, raw: Self::Raw) -> ValidationResult<Self::Value> {
        utils::check_positive(raw)?;
        utils::check_range(raw, 1, self.max_mg_dl)?;

        // max_mg_dl is caller-controlled; refuse anything that won't fit
        u32::try_from(raw).map_err(|_| ValidationError::OutOfRange {
            value: raw,
            min: 1,
            max: i64::from(u32::MAX),
        })
    }

    fn constraints(&self) -> ValidatorConstraints {
        ValidatorConstraints {
            min_value: 1,
            max_value: self.max_mg_dl,
        }
    }
}
