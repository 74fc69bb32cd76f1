//! Validation for request payloads.
//!
//! Field rules live on the payload types as `validator` derives; the shared
//! custom rules are in [`rules`].

pub mod rules;

pub use validator::Validate;

use crate::error::AppError;

/// Runs the payload's validation rules, converting failures into a 400.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(AppError::from)
}
