//! Per-field validation declarations.

use super::result::FieldError;
use super::rule::Rule;

/// One rule attached to a field, with an optional message override.
#[derive(Debug, Clone)]
struct Check {
    rule: Rule,
    message: Option<String>,
}

/// Static descriptor for one form field: identifier, required message and
/// an ordered list of rules.
///
/// Built fluently, one call per concern:
///
/// ```
/// use reflex::validate::{FieldSpec, Rule};
///
/// let phone = FieldSpec::new("phone")
///     .required("Phone number is required")
///     .rule_msg(
///         Rule::Numeric { min_len: 10 },
///         "Phone number must be numeric and at least 10 digits",
///     );
///
/// assert_eq!(phone.validate("1234567890"), Ok(()));
/// ```
///
/// Validation order: the required check runs first on the trimmed value and
/// produces its own message; then rules run in declaration order, first
/// failure wins. An empty optional field is valid without running any rules.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    id: String,
    required: Option<String>,
    checks: Vec<Check>,
}

impl FieldSpec {
    /// Create a field spec with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            required: None,
            checks: Vec::new(),
        }
    }

    /// Mark the field required, failing with `message` when empty.
    pub fn required(mut self, message: impl Into<String>) -> Self {
        self.required = Some(message.into());
        self
    }

    /// Attach a rule using its default message.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.checks.push(Check {
            rule,
            message: None,
        });
        self
    }

    /// Attach a rule with a custom failure message.
    pub fn rule_msg(mut self, rule: Rule, message: impl Into<String>) -> Self {
        self.checks.push(Check {
            rule,
            message: Some(message.into()),
        });
        self
    }

    /// Field identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Whether the field is required.
    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }

    /// Validate `value` using the real current year.
    pub fn validate(&self, value: &str) -> Result<(), FieldError> {
        self.validate_at(value, chrono::Datelike::year(&chrono::Utc::now()))
    }

    /// Validate `value` with an explicit current year (deterministic form).
    pub fn validate_at(&self, value: &str, current_year: i32) -> Result<(), FieldError> {
        if value.trim().is_empty() {
            return match &self.required {
                Some(message) => Err(FieldError::new(&self.id, message)),
                // Optional and empty: rules do not run.
                None => Ok(()),
            };
        }

        for check in &self.checks {
            if let Err(violation) = check.rule.check_at(value, current_year) {
                let message = check
                    .message
                    .clone()
                    .unwrap_or(violation.message);
                return Err(FieldError::new(&self.id, message));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_wins_over_rule_message() {
        let email = FieldSpec::new("email")
            .required("Email is required")
            .rule_msg(Rule::Email, "Email must be in a valid format");

        let err = email.validate("").unwrap_err();
        assert_eq!(err.message, "Email is required");
    }

    #[test]
    fn test_optional_empty_field_skips_rules() {
        let website = FieldSpec::new("website").rule(Rule::Email);
        assert!(website.validate("").is_ok());
        assert!(website.validate("not-an-email").is_err());
    }

    #[test]
    fn test_first_failing_rule_wins() {
        let code = FieldSpec::new("code")
            .required("Code is required")
            .rule_msg(Rule::Alphanumeric { min_len: 1 }, "letters and digits only")
            .rule_msg(Rule::MinLength(6), "too short");

        assert_eq!(code.validate("ab!").unwrap_err().message, "letters and digits only");
        assert_eq!(code.validate("ab1").unwrap_err().message, "too short");
    }
}
