//! Text field validators.
//!
//! A [`Validator`] turns a candidate value into a [`ValidationResult`]. Fields
//! run their validators on every change.

use crate::css::identifier::check_identifiers;

/// Outcome of validating one value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Success,
    /// The value was rejected; the string says why.
    Failure(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Success)
    }

    /// The failure reason, if any.
    pub fn failure_description(&self) -> Option<&str> {
        match self {
            ValidationResult::Success => None,
            ValidationResult::Failure(reason) => Some(reason),
        }
    }
}

/// Checks a text value.
pub trait Validator {
    fn validate(&self, value: &str) -> ValidationResult;
}

/// Accepts legal widget identifiers.
///
/// The empty string is accepted so a field can be cleared.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierValidator;

impl Validator for IdentifierValidator {
    fn validate(&self, value: &str) -> ValidationResult {
        if value.is_empty() {
            return ValidationResult::Success;
        }
        match check_identifiers("id", [value]) {
            Ok(()) => ValidationResult::Success,
            Err(err) => ValidationResult::Failure(err.to_string()),
        }
    }
}
