//! Reusable placement-strategy fixtures.
//!
//! - [`FixedOffset`]: always answers the same offset, valid or not.
//! - [`NeverFit`]: always reports no fit.
//! - [`RecordingStrategy`]: delegates, keeping every view it was shown.
//! - [`CountingStrategy`]: delegates, counting calls.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use wordarena::{FreeListView, PlacementStrategy};

/// Answers `offset` regardless of the view.
///
/// Useful for exercising the manager's re-validation of strategy answers.
#[derive(Clone, Copy, Debug)]
pub struct FixedOffset(pub usize);

impl PlacementStrategy for FixedOffset {
    fn select(&self, _words_needed: usize, _view: &FreeListView) -> Option<usize> {
        Some(self.0)
    }

    fn name(&self) -> &str {
        "fixed_offset"
    }
}

/// Reports no fit for every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverFit;

impl PlacementStrategy for NeverFit {
    fn select(&self, _words_needed: usize, _view: &FreeListView) -> Option<usize> {
        None
    }

    fn name(&self) -> &str {
        "never_fit"
    }
}

/// One strategy invocation: the request size and the view it saw.
pub type Call = (usize, FreeListView);

/// Delegates to an inner strategy and records each `(words, view)` call.
///
/// The log is shared, so keep a clone of [`log`](Self::log) before handing
/// the strategy to a manager.
pub struct RecordingStrategy<S> {
    pub inner: S,
    log: Arc<Mutex<Vec<Call>>>,
}

impl<S: PlacementStrategy> RecordingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shared handle to the call log.
    pub fn log(&self) -> Arc<Mutex<Vec<Call>>> {
        Arc::clone(&self.log)
    }
}

impl<S: PlacementStrategy> PlacementStrategy for RecordingStrategy<S> {
    fn select(&self, words_needed: usize, view: &FreeListView) -> Option<usize> {
        self.log
            .lock()
            .unwrap()
            .push((words_needed, view.clone()));
        self.inner.select(words_needed, view)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Delegates to an inner strategy and counts invocations.
///
/// Uses a shared `AtomicUsize` so the count stays readable after the
/// strategy has been moved into a manager.
pub struct CountingStrategy<S> {
    pub inner: S,
    calls: Arc<AtomicUsize>,
}

impl<S: PlacementStrategy> CountingStrategy<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared handle to the call counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl<S: PlacementStrategy> PlacementStrategy for CountingStrategy<S> {
    fn select(&self, words_needed: usize, view: &FreeListView) -> Option<usize> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.select(words_needed, view)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
