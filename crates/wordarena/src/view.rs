//! Serialized free-list snapshots.
//!
//! The [`FreeListView`] is what placement strategies see: a flat sequence of
//! 16-bit words laid out as
//!
//! ```text
//! [count, offset₁, length₁, offset₂, length₂, …]
//! ```
//!
//! in the free list's current iteration order. The same layout is exported
//! to callers, either as `u16` words or as little-endian bytes.

use crate::block::Block;

/// Owned `[count, offset, length, …]` snapshot of a free list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FreeListView {
    words: Vec<u16>,
}

impl FreeListView {
    /// Serialize `blocks` in iteration order.
    ///
    /// Offsets and lengths must fit in 16 bits; the manager guarantees this
    /// by capping arenas at [`ManagerConfig::MAX_WORDS`](crate::ManagerConfig::MAX_WORDS).
    /// Out-of-range values are truncated.
    pub fn from_blocks<'a, I>(blocks: I) -> Self
    where
        I: IntoIterator<Item = &'a Block>,
    {
        let mut words = vec![0u16];
        let mut count = 0u16;
        for block in blocks {
            words.push(block.offset as u16);
            words.push(block.length as u16);
            count = count.wrapping_add(1);
        }
        words[0] = count;
        Self { words }
    }

    /// Wrap caller-built words verbatim.
    ///
    /// An empty slice is read as a view with zero blocks. A count larger than
    /// the pairs actually present is tolerated by [`iter`](Self::iter), which
    /// stops at the last complete pair.
    pub fn from_words(words: Vec<u16>) -> Self {
        Self { words }
    }

    /// Number of blocks the view reports.
    pub fn count(&self) -> usize {
        self.words.first().copied().unwrap_or(0) as usize
    }

    /// Whether the view reports no free blocks.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// `(offset, length)` pairs in view order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.words
            .get(1..)
            .unwrap_or(&[])
            .chunks_exact(2)
            .take(self.count())
            .map(|pair| (pair[0] as usize, pair[1] as usize))
    }

    /// The raw 16-bit words, count first.
    pub fn as_words(&self) -> &[u16] {
        &self.words
    }

    /// Consume the view, returning its words.
    pub fn into_words(self) -> Vec<u16> {
        self.words
    }

    /// Binary form: every word as 16-bit little-endian.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }
}
