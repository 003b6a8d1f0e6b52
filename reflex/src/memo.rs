//! Revision-keyed memoization over a [`State`] source.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::state::State;

/// A memoized computation over a single [`State`] source.
///
/// `get` recomputes only when the source revision changed since the last
/// computation; otherwise the cached result is returned. The recompute
/// count is observable, so callers can verify that unrelated state changes
/// did not trigger work.
///
/// # Example
///
/// ```
/// use reflex::memo::Memo;
/// use reflex::state::State;
///
/// let items = State::new(vec![1u64, 2, 3]);
/// let total = Memo::new(&items, |v| v.iter().sum::<u64>());
///
/// assert_eq!(total.get(), 6);
/// assert_eq!(total.get(), 6);
/// assert_eq!(total.computations(), 1);
///
/// items.update(|v| v.push(4));
/// assert_eq!(total.get(), 10);
/// assert_eq!(total.computations(), 2);
/// ```
pub struct Memo<S, T> {
    source: State<S>,
    compute: Arc<dyn Fn(&S) -> T + Send + Sync>,
    cache: Arc<RwLock<Option<(u64, T)>>>,
    computations: Arc<AtomicU64>,
}

impl<S, T: Clone> Memo<S, T> {
    /// Create a memo over `source` with the given compute function.
    ///
    /// Nothing is computed until the first `get`.
    pub fn new<F>(source: &State<S>, compute: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        Self {
            source: source.clone(),
            compute: Arc::new(compute),
            cache: Arc::new(RwLock::new(None)),
            computations: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get the computed value, recomputing only if the source changed.
    pub fn get(&self) -> T {
        let revision = self.source.revision();

        if let Ok(cache) = self.cache.read()
            && let Some((cached_revision, value)) = cache.as_ref()
            && *cached_revision == revision
        {
            return value.clone();
        }

        let value = self.source.with(|s| (self.compute)(s));
        self.computations.fetch_add(1, Ordering::SeqCst);

        if let Ok(mut cache) = self.cache.write() {
            *cache = Some((revision, value.clone()));
        }
        value
    }

    /// Number of times the compute function has actually run.
    pub fn computations(&self) -> u64 {
        self.computations.load(Ordering::SeqCst)
    }
}

// The compute closure has no useful rendering, so only the observable
// counter is shown.
impl<S, T> fmt::Debug for Memo<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("computations", &self.computations.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl<S, T> Clone for Memo<S, T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            compute: Arc::clone(&self.compute),
            cache: Arc::clone(&self.cache),
            computations: Arc::clone(&self.computations),
        }
    }
}
