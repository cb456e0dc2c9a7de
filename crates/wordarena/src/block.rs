//! Word extents.

use std::fmt;

/// A contiguous run of words, free or allocated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Block {
    /// First word of the extent.
    pub offset: usize,
    /// Number of words in the extent.
    pub length: usize,
}

impl Block {
    /// Create a block.
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// One past the last word of the extent.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }

    /// Whether `word` lies inside this block.
    pub fn contains(&self, word: usize) -> bool {
        word >= self.offset && word < self.end()
    }

    /// Whether the two extents share at least one word.
    pub fn overlaps(&self, other: &Block) -> bool {
        self.offset < other.end() && other.offset < self.end()
    }

    /// Whether `next` starts exactly where this block ends.
    pub fn touches(&self, next: &Block) -> bool {
        self.end() == next.offset
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.offset, self.length)
    }
}

/// Sort `blocks` by offset and merge every run of touching neighbours.
///
/// After this call no two entries are adjacent and the slice order is
/// ascending by offset.
pub(crate) fn coalesce<A>(blocks: &mut smallvec::SmallVec<A>)
where
    A: smallvec::Array<Item = Block>,
{
    blocks.sort_by_key(|b| b.offset);
    let mut i = 0;
    while i + 1 < blocks.len() {
        if blocks[i].touches(&blocks[i + 1]) {
            blocks[i].length += blocks[i + 1].length;
            blocks.remove(i + 1);
        } else {
            i += 1;
        }
    }
}
