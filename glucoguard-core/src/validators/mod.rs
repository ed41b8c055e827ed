//! Input Validators
//!
//! ## Overview
//!
//! The entry form restricts the glucose field to `[0, 600]`, but nothing
//! downstream trusts the form. Every submission passes through a validator
//! before it can touch history or reach the classifier.
//!
//! ## Validation Layers
//!
//! ### 1. Positivity
//! Glucose is never zero or negative. Such input is a typo or an untouched
//! form field, never a measurement:
//! ```rust
//! use glucoguard_core::{GlucoseValidator, Validator, ValidationError};
//!
//! let validator = GlucoseValidator::default();
//! assert!(matches!(
//!     validator.validate(0),
//!     Err(ValidationError::NonPositive { value: 0 })
//! ));
//! ```
//!
//! ### 2. Form Domain
//! Values above the form maximum are rejected as out of range rather than
//! clamped. Accepted values pass through unchanged.
//!
//! ## Customization
//!
//! ```rust
//! use glucoguard_core::{GlucoseValidator, Validator};
//!
//! // Meter that reports up to 1000 mg/dL
//! let validator = GlucoseValidator::new_with_max(1000);
//! assert_eq!(validator.validate(750), Ok(750));
//! ```

mod glucose;
mod utils;

pub use glucose::GlucoseValidator;
