//! Presentation binding: the thin adapter between a [`Form`] and its
//! rendered widgets.
//!
//! Control flow per input event: the enclosing view calls
//! [`Binding::edit`], which writes through to the form and refreshes the
//! affected widget. On submit, [`Binding::submit`] runs the controller and
//! pushes the resulting error map into every widget.

use std::sync::Arc;

use crate::error::FormError;
use crate::form::{Form, Submission};

/// A rendered widget that can display one field's value and error.
///
/// The framework side of the view-to-core contract: widgets own their
/// presentation, the form owns the truth.
pub trait FieldWidget: Send + Sync {
    /// The form field this widget is bound to.
    fn field_id(&self) -> String;

    /// Display a new value.
    fn show_value(&self, value: &str);

    /// Display or clear the inline error annotation.
    fn show_error(&self, message: Option<&str>);
}

/// Connects one [`Form`] to its widgets.
pub struct Binding {
    form: Form,
    widgets: Vec<Arc<dyn FieldWidget>>,
}

impl Binding {
    /// Create a binding over `form` with no widgets attached yet.
    pub fn new(form: Form) -> Self {
        Self {
            form,
            widgets: Vec::new(),
        }
    }

    /// Attach a widget. The widget's field must be declared on the form.
    pub fn attach(mut self, widget: Arc<dyn FieldWidget>) -> Result<Self, FormError> {
        let field = widget.field_id();
        if !self.form.declares(&field) {
            return Err(FormError::UnboundWidget { field });
        }
        self.widgets.push(widget);
        Ok(self)
    }

    /// The bound form.
    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Forward an input-change event into the form and refresh the
    /// affected widget (value shown, error annotation cleared).
    pub fn edit(&self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        let value = value.into();
        self.form.set_value(field, value.clone())?;
        for widget in self.widgets_for(field) {
            widget.show_value(&value);
            widget.show_error(None);
        }
        Ok(())
    }

    /// Run a submit attempt and push the outcome into every widget.
    pub fn submit(&self) -> Submission {
        let outcome = self.form.submit();
        for widget in &self.widgets {
            widget.show_error(outcome.error_for(&widget.field_id()));
        }
        outcome
    }

    /// Replay the full form state into all widgets and clear the form's
    /// dirty flag. Used after [`Form::reset`] or any out-of-band mutation.
    pub fn refresh(&self) {
        for widget in &self.widgets {
            let field = widget.field_id();
            widget.show_value(self.form.value(&field).unwrap_or_default().as_str());
            widget.show_error(self.form.error(&field).as_deref());
        }
        self.form.clear_dirty();
    }

    fn widgets_for(&self, field: &str) -> impl Iterator<Item = &Arc<dyn FieldWidget>> {
        self.widgets.iter().filter(move |w| w.field_id() == field)
    }
}
