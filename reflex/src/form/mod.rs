//! Form state container and submission controller.
//!
//! One [`Form`] owns the declared [`FieldSpec`](crate::validate::FieldSpec)
//! list, the current raw values and the current per-field errors for a
//! single form instance. [`Form::submit`] validates every field in
//! declaration order — never short-circuiting, so the user sees every
//! problem at once — and yields a [`Submission`].
//!
//! # Example
//!
//! ```
//! use reflex::form::{Form, Submission};
//! use reflex::validate::{FieldSpec, Rule};
//!
//! let form = Form::new(vec![
//!     FieldSpec::new("email")
//!         .required("Email is required")
//!         .rule(Rule::Email),
//!     FieldSpec::new("password")
//!         .required("Password is required")
//!         .rule(Rule::MinLength(8)),
//! ]);
//!
//! form.set_value("email", "sarah.j@example.com").unwrap();
//! form.set_value("password", "hunter2hunter2").unwrap();
//!
//! match form.submit() {
//!     Submission::Accepted(values) => {
//!         assert_eq!(values["email"], "sarah.j@example.com");
//!         form.reset();
//!     }
//!     Submission::Rejected(errors) => panic!("unexpected: {errors:?}"),
//! }
//! ```

mod state;
mod submit;

pub use state::Form;
pub use submit::{Submission, validate_all};
