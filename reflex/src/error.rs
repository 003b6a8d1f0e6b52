//! Crate error types.
//!
//! Validation failures are not errors — they travel as
//! [`FieldError`](crate::validate::FieldError) data. These types cover
//! contract violations only.

/// Errors from [`Form`](crate::form::Form) operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FormError {
    /// The field id was never declared on this form.
    #[error("Field '{field}' is not declared on this form")]
    UnknownField {
        /// The undeclared field id.
        field: String,
    },

    /// A widget was attached for a field the form does not declare.
    #[error("Widget bound to undeclared field '{field}'")]
    UnboundWidget {
        /// The undeclared field id.
        field: String,
    },
}

/// Errors from [`Wizard`](crate::wizard::Wizard) operations.
#[derive(Debug, Clone, thiserror::Error)]
pub enum WizardError {
    /// A wizard was constructed with an empty step list.
    #[error("A wizard needs at least one step")]
    NoSteps,

    /// Submit was requested before reaching the final step.
    #[error("Submit is only available on step {total} (currently on step {step})")]
    NotOnFinalStep {
        /// Current 1-based step.
        step: usize,
        /// Total number of steps.
        total: usize,
    },
}

/// Errors from [`Router`](crate::route::Router) construction.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RouteError {
    /// The route pattern could not be parsed.
    #[error("Invalid route pattern '{pattern}': {reason}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },
}
