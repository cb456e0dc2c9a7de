//! Test utilities and mock types for wordarena development.
//!
//! Provides mock [`PlacementStrategy`](wordarena::PlacementStrategy)
//! implementations (see [`fixtures`]), an invariant checker for
//! [`MemoryManager`] state, and a helper that lays out an arena with a
//! chosen set of holes.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingStrategy, FixedOffset, NeverFit, RecordingStrategy};

use std::fmt;

use wordarena::{BestFit, Block, MemoryManager};

/// A broken block-list invariant, with the blocks involved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Free plus allocated words do not add up to the arena size.
    Conservation { accounted: usize, size_in_words: usize },
    /// Two blocks share at least one word.
    Overlap { first: Block, second: Block },
    /// Two holes touch and should have been merged.
    Uncoalesced { first: Block, second: Block },
    /// A block reaches past the end of the arena.
    OutOfBounds { block: Block, size_in_words: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservation {
                accounted,
                size_in_words,
            } => write!(f, "blocks cover {accounted} of {size_in_words} words"),
            Self::Overlap { first, second } => write!(f, "{first} overlaps {second}"),
            Self::Uncoalesced { first, second } => {
                write!(f, "holes {first} and {second} are adjacent")
            }
            Self::OutOfBounds {
                block,
                size_in_words,
            } => write!(f, "{block} extends past {size_in_words} words"),
        }
    }
}

/// Check conservation, non-overlap and bounds for a ready manager.
///
/// An unready manager trivially passes.
pub fn check_invariants(mm: &MemoryManager) -> Result<(), InvariantViolation> {
    if !mm.is_ready() {
        return Ok(());
    }
    let size_in_words = mm.size_in_words();
    let mut all: Vec<Block> = mm.free_blocks().to_vec();
    all.extend(mm.allocated_blocks().copied());

    let accounted: usize = all.iter().map(|b| b.length).sum();
    if accounted != size_in_words {
        return Err(InvariantViolation::Conservation {
            accounted,
            size_in_words,
        });
    }
    if let Some(&block) = all.iter().find(|b| b.end() > size_in_words) {
        return Err(InvariantViolation::OutOfBounds {
            block,
            size_in_words,
        });
    }
    all.sort_by_key(|b| b.offset);
    for pair in all.windows(2) {
        if pair[0].overlaps(&pair[1]) {
            return Err(InvariantViolation::Overlap {
                first: pair[0],
                second: pair[1],
            });
        }
    }
    Ok(())
}

/// Check that no two holes are adjacent. Holds right after any `free`.
pub fn check_coalesced(mm: &MemoryManager) -> Result<(), InvariantViolation> {
    let holes = mm.free_blocks();
    for first in holes {
        for second in holes {
            if first.touches(second) {
                return Err(InvariantViolation::Uncoalesced {
                    first: *first,
                    second: *second,
                });
            }
        }
    }
    Ok(())
}

/// Build a ready manager of `size_in_words` words whose only holes are
/// `holes` (offset, length), every other word allocated one word at a time.
///
/// The returned free list is sorted by offset and coalesced, since it is
/// produced by freeing. The manager keeps the [`BestFit`] strategy.
///
/// # Panics
///
/// Panics if the layout cannot be built (holes out of range or the
/// manager rejects the arena size).
pub fn arena_with_holes(
    word_size: usize,
    size_in_words: usize,
    holes: &[(usize, usize)],
) -> MemoryManager {
    let mut mm = MemoryManager::with_word_size(word_size, BestFit).expect("valid word size");
    mm.initialize(size_in_words).expect("valid arena size");
    let words: Vec<_> = (0..size_in_words)
        .map(|_| mm.allocate(word_size).expect("arena has room for every word"))
        .collect();
    for &(offset, length) in holes {
        for handle in &words[offset..offset + length] {
            mm.free(*handle);
        }
    }
    mm
}
