//! Built-in validation rules.

use std::sync::LazyLock;

use chrono::Datelike;
use regex::Regex;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

static FOUR_DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}$").expect("valid year pattern"));

/// Earliest year accepted by [`Rule::FourDigitYear`].
const MIN_YEAR: i32 = 1000;

/// How far past the current year [`Rule::FourDigitYear`] accepts.
const YEAR_HEADROOM: i32 = 10;

/// A pure validation rule over a raw string value.
///
/// Rules are deterministic: the verdict depends only on the rule, the value
/// and, for [`Rule::FourDigitYear`], the current year (pass it explicitly
/// via [`Rule::check_at`] when determinism matters).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Trimmed value must be non-empty.
    NonEmpty,
    /// Value must look like `local@domain.tld` (no whitespace, single `@`,
    /// a `.` in the domain part).
    Email,
    /// Value must be at least `n` characters long.
    MinLength(usize),
    /// Value must be digits only and at least `min_len` digits long.
    Numeric {
        /// Minimum number of digits.
        min_len: usize,
    },
    /// Value must be `[A-Za-z0-9]` only and at least `min_len` characters.
    Alphanumeric {
        /// Minimum number of characters.
        min_len: usize,
    },
    /// Value must be exactly four digits within `[1000, current year + 10]`.
    FourDigitYear,
    /// Value must parse as a finite decimal greater than zero.
    PositiveDecimal,
}

impl Rule {
    /// Check `value` against this rule using the real current year.
    pub fn check(&self, value: &str) -> Result<(), Violation> {
        self.check_at(value, chrono::Utc::now().year())
    }

    /// Check `value` against this rule with an explicit current year.
    ///
    /// Only [`Rule::FourDigitYear`] consults `current_year`; every other
    /// rule ignores it.
    pub fn check_at(&self, value: &str, current_year: i32) -> Result<(), Violation> {
        match self {
            Rule::NonEmpty => {
                if value.trim().is_empty() {
                    Err(Violation::required())
                } else {
                    Ok(())
                }
            }
            Rule::Email => {
                if value.trim().is_empty() {
                    Err(Violation::required())
                } else if !EMAIL_RE.is_match(value) {
                    Err(Violation::new(
                        ViolationKind::Malformed,
                        "Must be a valid email address",
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::MinLength(min) => {
                if value.chars().count() < *min {
                    Err(Violation::new(
                        ViolationKind::TooShort,
                        format!("Must be at least {min} characters"),
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Numeric { min_len } => {
                if value.is_empty() {
                    Err(Violation::required())
                } else if !value.chars().all(|c| c.is_ascii_digit()) {
                    Err(Violation::new(
                        ViolationKind::NonNumeric,
                        "Must contain digits only",
                    ))
                } else if value.chars().count() < *min_len {
                    Err(Violation::new(
                        ViolationKind::TooShort,
                        format!("Must be at least {min_len} digits"),
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::Alphanumeric { min_len } => {
                if !value.chars().all(|c| c.is_ascii_alphanumeric()) {
                    Err(Violation::new(
                        ViolationKind::Malformed,
                        "Must contain only letters and digits",
                    ))
                } else if value.chars().count() < *min_len {
                    Err(Violation::new(
                        ViolationKind::TooShort,
                        format!("Must be at least {min_len} characters"),
                    ))
                } else {
                    Ok(())
                }
            }
            Rule::FourDigitYear => {
                if !FOUR_DIGITS_RE.is_match(value) {
                    return Err(Violation::new(
                        ViolationKind::Malformed,
                        "Must be a four-digit year",
                    ));
                }
                let max_year = current_year + YEAR_HEADROOM;
                match value.parse::<i32>() {
                    Ok(year) if (MIN_YEAR..=max_year).contains(&year) => Ok(()),
                    _ => Err(Violation::new(
                        ViolationKind::OutOfRange,
                        format!("Must be between {MIN_YEAR} and {max_year}"),
                    )),
                }
            }
            Rule::PositiveDecimal => match value.trim().parse::<f64>() {
                Ok(number) if number.is_finite() && number > 0.0 => Ok(()),
                Ok(_) => Err(Violation::new(
                    ViolationKind::OutOfRange,
                    "Must be greater than zero",
                )),
                Err(_) => Err(Violation::new(ViolationKind::NonNumeric, "Must be a number")),
            },
        }
    }
}

/// A single rule failure: what went wrong and the default message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Failure category.
    pub kind: ViolationKind,
    /// Default human-readable message. [`FieldSpec`](super::FieldSpec) may
    /// override it per rule.
    pub message: String,
}

impl Violation {
    pub(crate) fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn required() -> Self {
        Self::new(ViolationKind::Required, "Field is required")
    }
}

/// Category of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Required value was empty.
    Required,
    /// Value did not match the expected format.
    Malformed,
    /// Value was shorter than the minimum length.
    TooShort,
    /// Value parsed but fell outside the allowed range.
    OutOfRange,
    /// Value was expected to be numeric and was not.
    NonNumeric,
}
