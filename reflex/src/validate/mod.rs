//! Field validation.
//!
//! A field is declared once as a [`FieldSpec`] (id, required message, rules)
//! and validated against raw string values. Failures are data, never
//! exceptions: each failing field yields one [`FieldError`] and the caller
//! decides how long it stays visible.
//!
//! # Example
//!
//! ```
//! use reflex::validate::{FieldSpec, Rule};
//!
//! let email = FieldSpec::new("email")
//!     .required("Email is required")
//!     .rule_msg(Rule::Email, "Email must be in a valid format");
//!
//! assert!(email.validate("sarah.j@example.com").is_ok());
//! assert!(email.validate("sarah.j@").is_err());
//! ```

mod field;
mod result;
mod rule;

pub use field::FieldSpec;
pub use result::FieldError;
pub use rule::{Rule, Violation, ViolationKind};
