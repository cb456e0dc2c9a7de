//! Arena-specific error types.

use std::error::Error;
use std::fmt;
use std::io;

/// Errors that can occur while (re)initializing an arena.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// An arena of zero words was requested.
    EmptyArena,
    /// The requested arena does not fit in the 16-bit free-list view.
    ArenaTooLarge {
        /// Number of words requested.
        requested: usize,
        /// Largest supported arena in words.
        max: usize,
    },
    /// `size_in_words * word_size` exceeds `isize::MAX` bytes.
    CapacityOverflow {
        /// Number of words requested.
        words: usize,
        /// Configured bytes per word.
        word_size: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyArena => write!(f, "arena must contain at least one word"),
            Self::ArenaTooLarge { requested, max } => {
                write!(
                    f,
                    "arena too large: requested {requested} words, maximum {max} words"
                )
            }
            Self::CapacityOverflow { words, word_size } => {
                write!(
                    f,
                    "arena byte size overflows: {words} words of {word_size} bytes"
                )
            }
        }
    }
}

impl Error for ArenaError {}

/// Errors returned by the file-backed exports.
#[derive(Debug)]
pub enum ExportError {
    /// The manager has no arena to export.
    NotReady,
    /// The export target could not be created or written.
    Io(io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "memory manager is not initialized"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl Error for ExportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NotReady => None,
        }
    }
}

impl From<io::Error> for ExportError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
