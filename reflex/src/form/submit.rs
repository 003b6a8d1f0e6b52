//! Submission controller.

use std::collections::HashMap;

use crate::validate::{FieldError, FieldSpec};

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Every field validated; carries a snapshot of the submitted values.
    Accepted(HashMap<String, String>),
    /// One or more fields failed; carries the complete failure set.
    Rejected(Vec<FieldError>),
}

impl Submission {
    /// Whether the submission was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The failure set, empty when accepted.
    pub fn errors(&self) -> &[FieldError] {
        match self {
            Self::Accepted(_) => &[],
            Self::Rejected(errors) => errors,
        }
    }

    /// The error message for one field, if that field failed.
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

/// Validate every field in declaration order against `values`.
///
/// All fields are always validated regardless of how many already failed,
/// so the returned set is complete. A field with no entry in `values` is
/// validated as empty.
pub fn validate_all(
    specs: &[FieldSpec],
    values: &HashMap<String, String>,
    current_year: i32,
) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for spec in specs {
        let value = values.get(spec.id()).map(String::as_str).unwrap_or("");
        if let Err(error) = spec.validate_at(value, current_year) {
            errors.push(error);
        }
    }
    errors
}
