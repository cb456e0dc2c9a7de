//! Memory manager configuration parameters.

use std::error::Error;
use std::fmt;

/// Configuration for a [`MemoryManager`](crate::MemoryManager).
///
/// Validated at construction; immutable for the lifetime of the manager.
/// The arena size itself is not part of the config because it is chosen
/// per [`initialize`](crate::MemoryManager::initialize) call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManagerConfig {
    /// Bytes per word. Every offset and length in the arena is measured in
    /// words of this size.
    ///
    /// Default: 8. Must be non-zero.
    pub word_size: usize,
}

impl ManagerConfig {
    /// Default word size in bytes.
    pub const DEFAULT_WORD_SIZE: usize = 8;

    /// Largest arena, in words, that the 16-bit free-list view can describe.
    pub const MAX_WORDS: usize = u16::MAX as usize;

    /// Create a config with the given word size.
    pub fn new(word_size: usize) -> Self {
        Self { word_size }
    }

    /// Check the config's structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_size == 0 {
            return Err(ConfigError::InvalidWordSize {
                word_size: self.word_size,
            });
        }
        Ok(())
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WORD_SIZE)
    }
}

/// Errors detected by [`ManagerConfig::validate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Word size must be at least one byte.
    InvalidWordSize {
        /// The rejected word size.
        word_size: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWordSize { word_size } => {
                write!(f, "invalid word size {word_size}: must be at least 1 byte")
            }
        }
    }
}

impl Error for ConfigError {}
