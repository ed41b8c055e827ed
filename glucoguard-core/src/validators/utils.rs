//! Shared validation checks
//!
//! Pure functions, no side effects. Each returns the first violated rule.

use crate::errors::{ValidationError, ValidationResult};

/// Reject zero and negative values
pub fn check_positive(value: i64) -> ValidationResult<()> {
    if value <= 0 {
        Err(ValidationError::NonPositive { value })
    } else {
        Ok(())
    }
}

/// Check if a value is within the specified inclusive range
pub fn check_range(value: i64, min: i64, max: i64) -> ValidationResult<()> {
    if value < min || value > max {
        Err(ValidationError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}
