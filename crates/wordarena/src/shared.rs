//! Mutex-serialized manager for multiple callers.
//!
//! [`MemoryManager`] itself is single-threaded: two allocations racing on the
//! same free list could hand out overlapping handles. [`SharedManager`] puts
//! the whole manager behind one `Mutex`, so every operation, mutating or not,
//! runs to completion before the next one starts.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::error::{ArenaError, ExportError};
use crate::handle::Handle;
use crate::manager::MemoryManager;
use crate::strategy::PlacementStrategy;
use crate::view::FreeListView;

/// Cloneable, thread-safe handle to one [`MemoryManager`].
#[derive(Clone)]
pub struct SharedManager {
    inner: Arc<Mutex<MemoryManager>>,
}

// Compile-time assertion: SharedManager must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SharedManager>();
};

impl SharedManager {
    /// Wrap `manager` for shared use.
    pub fn new(manager: MemoryManager) -> Self {
        Self {
            inner: Arc::new(Mutex::new(manager)),
        }
    }

    // A panic inside a manager call cannot leave the block lists half
    // updated, so a poisoned lock is still safe to use.
    fn lock(&self) -> MutexGuard<'_, MemoryManager> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with exclusive access to the manager.
    pub fn with<R>(&self, f: impl FnOnce(&mut MemoryManager) -> R) -> R {
        f(&mut self.lock())
    }

    /// See [`MemoryManager::initialize`].
    pub fn initialize(&self, size_in_words: usize) -> Result<(), ArenaError> {
        self.lock().initialize(size_in_words)
    }

    /// See [`MemoryManager::shutdown`].
    pub fn shutdown(&self) {
        self.lock().shutdown();
    }

    /// See [`MemoryManager::allocate`].
    pub fn allocate(&self, size_in_bytes: usize) -> Option<Handle> {
        self.lock().allocate(size_in_bytes)
    }

    /// See [`MemoryManager::free`].
    pub fn free(&self, handle: Handle) {
        self.lock().free(handle);
    }

    /// See [`MemoryManager::set_strategy`].
    pub fn set_strategy<S>(&self, strategy: S)
    where
        S: PlacementStrategy + 'static,
    {
        self.lock().set_strategy(strategy);
    }

    /// See [`MemoryManager::free_list_view`].
    pub fn free_list_view(&self) -> Option<FreeListView> {
        self.lock().free_list_view()
    }

    /// See [`MemoryManager::hole_map`].
    pub fn hole_map(&self) -> Option<String> {
        self.lock().hole_map()
    }

    /// See [`MemoryManager::dump_hole_map`].
    pub fn dump_hole_map(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        self.lock().dump_hole_map(path)
    }

    /// See [`MemoryManager::export_bitmap`].
    pub fn export_bitmap(&self) -> Option<Vec<u8>> {
        self.lock().export_bitmap()
    }

    /// See [`MemoryManager::is_ready`].
    pub fn is_ready(&self) -> bool {
        self.lock().is_ready()
    }

    /// See [`MemoryManager::word_size`].
    pub fn word_size(&self) -> usize {
        self.lock().word_size()
    }

    /// See [`MemoryManager::memory_start`].
    pub fn memory_start(&self) -> Option<Handle> {
        self.lock().memory_start()
    }

    /// See [`MemoryManager::memory_limit`].
    pub fn memory_limit(&self) -> usize {
        self.lock().memory_limit()
    }
}
