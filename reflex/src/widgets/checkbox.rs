//! Checkbox widget.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

/// Unique identifier for a Checkbox widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CheckboxId(usize);

impl CheckboxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for CheckboxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__checkbox_{}", self.0)
    }
}

/// Internal state for a Checkbox widget
#[derive(Debug, Default)]
struct CheckboxInner {
    /// Whether the checkbox is checked
    checked: bool,
    /// Label text
    label: String,
}

/// A checkbox widget with reactive state.
///
/// Also doubles as the on/off toggle in the lesson previews: `toggle`
/// flips the checked state and returns the new value.
#[derive(Debug)]
pub struct Checkbox {
    /// Unique identifier for this checkbox instance
    id: CheckboxId,
    /// Internal state
    inner: Arc<RwLock<CheckboxInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Checkbox {
    /// Create a new unchecked checkbox without a label
    pub fn new() -> Self {
        Self {
            id: CheckboxId::new(),
            inner: Arc::new(RwLock::new(CheckboxInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a checkbox with a label
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            id: CheckboxId::new(),
            inner: Arc::new(RwLock::new(CheckboxInner {
                label: label.into(),
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this checkbox
    pub fn id(&self) -> CheckboxId {
        self.id
    }

    /// Whether the checkbox is currently checked
    pub fn is_checked(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.checked)
            .unwrap_or(false)
    }

    /// Get the label text
    pub fn label(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.label.clone())
            .unwrap_or_default()
    }

    /// Set the checked state
    pub fn set_checked(&self, checked: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.checked != checked
        {
            guard.checked = checked;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Flip the checked state and return the new value
    pub fn toggle(&self) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            guard.checked = !guard.checked;
            self.dirty.store(true, Ordering::SeqCst);
            guard.checked
        } else {
            false
        }
    }

    /// Set the label text
    pub fn set_label(&self, label: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.label = label.into();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the checkbox state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Checkbox {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for Checkbox {
    fn default() -> Self {
        Self::new()
    }
}
