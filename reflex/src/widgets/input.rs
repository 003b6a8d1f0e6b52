//! Text input widget.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::binding::FieldWidget;

/// Unique identifier for an Input widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InputId(usize);

impl InputId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for InputId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__input_{}", self.0)
    }
}

/// Internal state for an Input widget
#[derive(Debug, Default)]
struct InputInner {
    /// Current text value
    value: String,
    /// Placeholder text
    placeholder: String,
    /// Validation error message (if any)
    error: Option<String>,
}

/// A text input widget bound to one form field.
///
/// `Input` manages its own text value and error annotation, and implements
/// [`FieldWidget`] so a [`Binding`](crate::binding::Binding) can drive it.
/// Keystrokes are simulated with [`push_char`](Input::push_char) and
/// [`backspace`](Input::backspace).
#[derive(Debug)]
pub struct Input {
    /// Unique identifier for this input instance
    id: InputId,
    /// The form field this input is bound to
    field: String,
    /// Internal state
    inner: Arc<RwLock<InputInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Input {
    /// Create an empty input bound to `field`.
    pub fn for_field(field: impl Into<String>) -> Self {
        Self {
            id: InputId::new(),
            field: field.into(),
            inner: Arc::new(RwLock::new(InputInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create an input bound to `field` with a placeholder.
    pub fn with_placeholder(field: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            id: InputId::new(),
            field: field.into(),
            inner: Arc::new(RwLock::new(InputInner {
                placeholder: placeholder.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this input
    pub fn id(&self) -> InputId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the placeholder text
    pub fn placeholder(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.placeholder.clone())
            .unwrap_or_default()
    }

    /// Check if the input is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Number of characters in the current value
    pub fn char_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.chars().count())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the input value
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Append a typed character
    pub fn push_char(&self, c: char) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.push(c);
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Delete the last character (backspace)
    pub fn backspace(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.value.pop().is_some()
        {
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Validation display
    // -------------------------------------------------------------------------

    /// Set a validation error message on this input.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if this input has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the input state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Input {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            field: self.field.clone(),
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl FieldWidget for Input {
    fn field_id(&self) -> String {
        self.field.clone()
    }

    fn show_value(&self, value: &str) {
        if let Ok(mut guard) = self.inner.write()
            && guard.value != value
        {
            guard.value = value.to_string();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    fn show_error(&self, message: Option<&str>) {
        match message {
            Some(msg) => self.set_error(msg),
            None => self.clear_error(),
        }
    }
}
