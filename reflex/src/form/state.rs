//! Form state container.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use chrono::Datelike;
use log::debug;

use crate::error::FormError;
use crate::validate::{FieldError, FieldSpec};

use super::submit::{Submission, validate_all};

#[derive(Debug, Default)]
struct FormInner {
    values: HashMap<String, String>,
    errors: HashMap<String, String>,
}

/// In-memory holder of current values and current errors for one form.
///
/// Created when a form view mounts, discarded when it unmounts; nothing
/// outlives the view. Every declared field gets a value entry initialized
/// to the empty string. Error keys are always a subset of declared ids.
///
/// Cheap to clone; clones share the same underlying state.
#[derive(Debug)]
pub struct Form {
    specs: Arc<Vec<FieldSpec>>,
    inner: Arc<RwLock<FormInner>>,
    dirty: Arc<AtomicBool>,
}

impl Form {
    /// Create a form from its field declarations.
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        let values = specs
            .iter()
            .map(|spec| (spec.id().to_string(), String::new()))
            .collect();
        Self {
            specs: Arc::new(specs),
            inner: Arc::new(RwLock::new(FormInner {
                values,
                errors: HashMap::new(),
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The declared field specs, in declaration order.
    pub fn specs(&self) -> &[FieldSpec] {
        &self.specs
    }

    /// Declared field ids, in declaration order.
    pub fn field_ids(&self) -> Vec<String> {
        self.specs.iter().map(|s| s.id().to_string()).collect()
    }

    /// Whether `field` is declared on this form.
    pub fn declares(&self, field: &str) -> bool {
        self.specs.iter().any(|s| s.id() == field)
    }

    // -------------------------------------------------------------------------
    // Values
    // -------------------------------------------------------------------------

    /// Overwrite the value of a declared field.
    ///
    /// Editing a field clears its pending error: the user is assumed to be
    /// correcting it, and the error reappears only on the next submit if
    /// still invalid. Setting an identical value with no pending error is a
    /// no-op.
    pub fn set_value(&self, field: &str, value: impl Into<String>) -> Result<(), FormError> {
        if !self.declares(field) {
            return Err(FormError::UnknownField {
                field: field.to_string(),
            });
        }
        let value = value.into();
        if let Ok(mut inner) = self.inner.write() {
            let unchanged = inner.values.get(field) == Some(&value);
            let had_error = inner.errors.remove(field).is_some();
            if unchanged && !had_error {
                return Ok(());
            }
            inner.values.insert(field.to_string(), value);
            self.dirty.store(true, Ordering::SeqCst);
        }
        Ok(())
    }

    /// Current raw value of a declared field.
    pub fn value(&self, field: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.values.get(field).cloned())
    }

    /// Snapshot of all current values.
    pub fn values(&self) -> HashMap<String, String> {
        self.inner
            .read()
            .map(|inner| inner.values.clone())
            .unwrap_or_default()
    }

    /// Reset all values to empty and clear all errors.
    ///
    /// Called after a successful submission.
    pub fn reset(&self) {
        if let Ok(mut inner) = self.inner.write() {
            for value in inner.values.values_mut() {
                value.clear();
            }
            inner.errors.clear();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Errors
    // -------------------------------------------------------------------------

    /// Current error message for a field, if any.
    pub fn error(&self, field: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.errors.get(field).cloned())
    }

    /// Snapshot of the current error map.
    pub fn errors(&self) -> HashMap<String, String> {
        self.inner
            .read()
            .map(|inner| inner.errors.clone())
            .unwrap_or_default()
    }

    /// Whether any field currently has an error.
    pub fn has_errors(&self) -> bool {
        self.inner
            .read()
            .map(|inner| !inner.errors.is_empty())
            .unwrap_or(false)
    }

    /// Replace the whole error map (errors are replaced, never patched).
    pub fn replace_errors(&self, errors: &[FieldError]) {
        if let Ok(mut inner) = self.inner.write() {
            inner.errors = errors
                .iter()
                .map(|e| (e.field.clone(), e.message.clone()))
                .collect();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate every field without touching the error map.
    pub fn validate_at(&self, current_year: i32) -> Vec<FieldError> {
        validate_all(&self.specs, &self.values(), current_year)
    }

    /// Run a submit attempt using the real current year.
    pub fn submit(&self) -> Submission {
        self.submit_at(chrono::Utc::now().year())
    }

    /// Run a submit attempt with an explicit current year.
    ///
    /// On rejection the form's error map is replaced with the complete
    /// failure set; values are left untouched either way, so the caller
    /// decides when to [`reset`](Form::reset) after acceptance.
    pub fn submit_at(&self, current_year: i32) -> Submission {
        let errors = self.validate_at(current_year);
        if errors.is_empty() {
            debug!("form submit accepted ({} fields)", self.specs.len());
            self.replace_errors(&[]);
            Submission::Accepted(self.values())
        } else {
            debug!("form submit rejected ({} errors)", errors.len());
            self.replace_errors(&errors);
            Submission::Rejected(errors)
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the form state changed since the last refresh.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Form {
    fn clone(&self) -> Self {
        Self {
            specs: Arc::clone(&self.specs),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
