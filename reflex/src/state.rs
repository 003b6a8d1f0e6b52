use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

/// Reactive state cell with interior mutability.
///
/// `State<T>` is the unit of view state: cheap to clone, safe to share
/// between the model and its presentation. Every mutation marks the cell
/// dirty (consumed by the presentation refresh) and bumps a revision
/// counter (consumed by [`Memo`](crate::memo::Memo)).
///
/// # Example
///
/// ```
/// use reflex::state::State;
///
/// let count = State::new(0);
/// count.update(|c| *c += 1);
/// assert_eq!(count.get(), 1);
/// assert!(count.is_dirty());
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    revision: Arc<AtomicU64>,
    dirty: Arc<AtomicBool>,
}

impl<T> State<T> {
    /// Create a new state cell with the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            revision: Arc::new(AtomicU64::new(0)),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Borrow the current value without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        match self.inner.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    /// Set a new value.
    pub fn set(&self, value: T) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = value;
            self.mark_changed();
        }
    }

    /// Update the value in place.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        if let Ok(mut guard) = self.inner.write() {
            f(&mut guard);
            self.mark_changed();
        }
    }

    /// Current revision. Incremented on every mutation.
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }

    /// Check if the state has been modified since the last refresh.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_changed(&self) {
        self.revision.fetch_add(1, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            revision: Arc::clone(&self.revision),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
