//! Multi-step wizard over one shared [`Form`].
//!
//! Steps are 1-based indices with two transitions, `Next` and `Back`, both
//! clamped at the bounds. All steps share a single form, so values entered
//! in one step survive any sequence of navigation. Submit is available
//! only on the final step.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use log::trace;

use crate::error::WizardError;
use crate::form::{Form, Submission};
use crate::validate::FieldError;

/// A navigation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nav {
    /// Advance one step (no-op on the final step).
    Next,
    /// Go back one step (no-op on the first step).
    Back,
}

/// Pure step transition: `Next` clamps at `total`, `Back` clamps at 1.
pub fn transition(step: usize, total: usize, nav: Nav) -> usize {
    match nav {
        Nav::Next => step.saturating_add(1).min(total),
        Nav::Back => step.saturating_sub(1).max(1),
    }
}

/// One wizard step: a label and the form fields it presents.
#[derive(Debug, Clone)]
pub struct WizardStep {
    /// Step label shown in the step indicator.
    pub label: String,
    /// Ids of the fields rendered on this step.
    pub fields: Vec<String>,
}

impl WizardStep {
    /// Create a step.
    pub fn new(label: impl Into<String>, fields: impl IntoIterator<Item = &'static str>) -> Self {
        Self {
            label: label.into(),
            fields: fields.into_iter().map(str::to_string).collect(),
        }
    }
}

/// A multi-step form wizard.
///
/// # Example
///
/// ```
/// use reflex::form::Form;
/// use reflex::validate::FieldSpec;
/// use reflex::wizard::{Wizard, WizardStep};
///
/// let form = Form::new(vec![FieldSpec::new("name"), FieldSpec::new("city")]);
/// let wizard = Wizard::new(form, vec![
///     WizardStep::new("Personal", ["name"]),
///     WizardStep::new("Address", ["city"]),
/// ])
/// .unwrap();
///
/// wizard.form().set_value("name", "Ada").unwrap();
/// wizard.next();
/// wizard.back();
/// // Values persist across navigation.
/// assert_eq!(wizard.form().value("name").as_deref(), Some("Ada"));
/// ```
#[derive(Debug)]
pub struct Wizard {
    form: Form,
    steps: Vec<WizardStep>,
    /// Current 1-based step.
    step: Arc<AtomicUsize>,
}

impl Wizard {
    /// Create a wizard starting on step 1.
    ///
    /// Fails with [`WizardError::NoSteps`] when `steps` is empty.
    pub fn new(form: Form, steps: Vec<WizardStep>) -> Result<Self, WizardError> {
        if steps.is_empty() {
            return Err(WizardError::NoSteps);
        }
        Ok(Self {
            form,
            steps,
            step: Arc::new(AtomicUsize::new(1)),
        })
    }

    /// The shared form. Values persist across all steps.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Current 1-based step index.
    pub fn step(&self) -> usize {
        self.step.load(Ordering::SeqCst)
    }

    /// Total number of steps.
    pub fn total(&self) -> usize {
        self.steps.len()
    }

    /// Label of the current step.
    pub fn label(&self) -> &str {
        &self.steps[self.step() - 1].label
    }

    /// Field ids rendered on the current step.
    pub fn fields(&self) -> &[String] {
        &self.steps[self.step() - 1].fields
    }

    /// Completion percentage, rounded, as shown in the progress bar.
    pub fn progress_percent(&self) -> u8 {
        ((self.step() as f64 / self.total() as f64) * 100.0).round() as u8
    }

    /// Apply a navigation event and return the resulting step.
    pub fn nav(&self, nav: Nav) -> usize {
        let current = self.step();
        let next = transition(current, self.total(), nav);
        if next != current {
            trace!("wizard step {current} -> {next}");
            self.step.store(next, Ordering::SeqCst);
        }
        next
    }

    /// Advance one step.
    pub fn next(&self) -> usize {
        self.nav(Nav::Next)
    }

    /// Go back one step.
    pub fn back(&self) -> usize {
        self.nav(Nav::Back)
    }

    /// Whether the current step is the final one.
    pub fn can_submit(&self) -> bool {
        self.step() == self.total()
    }

    /// Validate only the fields of the current step.
    ///
    /// Navigation never gates on this; it exists so a product can opt into
    /// per-step gating.
    pub fn validate_step(&self) -> Vec<FieldError> {
        let fields = self.fields();
        self.form
            .validate_at(chrono::Datelike::year(&chrono::Utc::now()))
            .into_iter()
            .filter(|e| fields.contains(&e.field))
            .collect()
    }

    /// Submit the whole form. Only available on the final step.
    pub fn submit(&self) -> Result<Submission, WizardError> {
        if !self.can_submit() {
            return Err(WizardError::NotOnFinalStep {
                step: self.step(),
                total: self.total(),
            });
        }
        Ok(self.form.submit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_clamps_at_bounds() {
        assert_eq!(transition(3, 3, Nav::Next), 3);
        assert_eq!(transition(1, 3, Nav::Back), 1);
        assert_eq!(transition(2, 3, Nav::Next), 3);
        assert_eq!(transition(2, 3, Nav::Back), 1);
    }
}
