//! Allocation handles.
//!
//! A [`Handle`] is the opaque address returned by
//! [`MemoryManager::allocate`](crate::MemoryManager::allocate). It is the
//! arena's base address plus `offset * word_size`, so handles compare and
//! order like the bytes they name. Handles are plain values: they carry no
//! borrow of the manager and are never dereferenced directly. Use
//! [`MemoryManager::bytes`](crate::MemoryManager::bytes) to reach the data.

use std::fmt;

/// Opaque byte address inside a managed arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use]
pub struct Handle(usize);

impl Handle {
    /// Build a handle from a raw address.
    ///
    /// Useful for probing the manager with addresses it did not hand out
    /// (interior pointers, foreign addresses); such handles are rejected
    /// silently by [`free`](crate::MemoryManager::free).
    pub fn from_addr(addr: usize) -> Self {
        Self(addr)
    }

    /// The raw address.
    pub fn addr(self) -> usize {
        self.0
    }

    /// A handle `bytes` past this one.
    pub fn add(self, bytes: usize) -> Self {
        Self(self.0.wrapping_add(bytes))
    }

    /// Byte distance from `base` to this handle, or `None` if it lies below.
    pub fn byte_offset_from(self, base: Handle) -> Option<usize> {
        self.0.checked_sub(base.0)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Handle({:#x})", self.0)
    }
}
