//! The arena manager.
//!
//! [`MemoryManager`] owns a zero-initialized byte buffer of
//! `size_in_words * word_size` bytes and two block lists describing it:
//!
//! ```text
//! MemoryManager
//! ├── buffer: Option<Box<[u8]>>      (Some == ready)
//! ├── free_blocks: SmallVec<Block>   (view order; sorted + coalesced after free)
//! ├── allocated_blocks: IndexMap<offset, Block>
//! └── strategy: Box<dyn PlacementStrategy>
//! ```
//!
//! While ready, the free and allocated blocks partition the arena exactly:
//! their lengths sum to `size_in_words` and no two of them overlap.
//!
//! # Limitations
//!
//! [`free`](MemoryManager::free) only releases a block when handed the
//! handle of its first word. Interior addresses, double frees and foreign
//! handles are ignored without error.

use std::fmt;
use std::ops::Range;
use std::path::Path;

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::bitmap;
use crate::block::{coalesce, Block};
use crate::config::{ConfigError, ManagerConfig};
use crate::error::{ArenaError, ExportError};
use crate::handle::Handle;
use crate::holemap;
use crate::strategy::PlacementStrategy;
use crate::view::FreeListView;

/// Inline capacity of the free list before it spills to the heap.
const INLINE_HOLES: usize = 8;

/// A word-addressed arena with a pluggable placement strategy.
///
/// # Examples
///
/// ```
/// use wordarena::{BestFit, ManagerConfig, MemoryManager};
///
/// let mut mm = MemoryManager::new(ManagerConfig::new(1), BestFit).unwrap();
/// mm.initialize(10).unwrap();
///
/// let h = mm.allocate(4).unwrap();
/// assert_eq!(mm.hole_map().unwrap(), "[4, 6]");
///
/// mm.free(h);
/// assert_eq!(mm.hole_map().unwrap(), "[0, 10]");
/// ```
pub struct MemoryManager {
    config: ManagerConfig,
    size_in_words: usize,
    buffer: Option<Box<[u8]>>,
    free_blocks: SmallVec<[Block; INLINE_HOLES]>,
    allocated_blocks: IndexMap<usize, Block>,
    strategy: Box<dyn PlacementStrategy>,
}

impl MemoryManager {
    /// Create an unready manager. Call [`initialize`](Self::initialize)
    /// before allocating.
    pub fn new<S>(config: ManagerConfig, strategy: S) -> Result<Self, ConfigError>
    where
        S: PlacementStrategy + 'static,
    {
        config.validate()?;
        debug!(word_size = config.word_size, strategy = strategy.name(), "memory manager created");
        Ok(Self {
            config,
            size_in_words: 0,
            buffer: None,
            free_blocks: SmallVec::new(),
            allocated_blocks: IndexMap::new(),
            strategy: Box::new(strategy),
        })
    }

    /// Shorthand for `MemoryManager::new(ManagerConfig::new(word_size), strategy)`.
    pub fn with_word_size<S>(word_size: usize, strategy: S) -> Result<Self, ConfigError>
    where
        S: PlacementStrategy + 'static,
    {
        Self::new(ManagerConfig::new(word_size), strategy)
    }

    // ── Lifecycle ───────────────────────────────────────────────

    /// Create a fresh arena of `size_in_words` words.
    ///
    /// Any arena the manager already owns is released first, together with
    /// every outstanding handle into it. On error the manager is left
    /// unready.
    pub fn initialize(&mut self, size_in_words: usize) -> Result<(), ArenaError> {
        self.release();

        if size_in_words == 0 {
            return Err(ArenaError::EmptyArena);
        }
        if size_in_words > ManagerConfig::MAX_WORDS {
            return Err(ArenaError::ArenaTooLarge {
                requested: size_in_words,
                max: ManagerConfig::MAX_WORDS,
            });
        }
        let word_size = self.config.word_size;
        // Allocations are capped at isize::MAX bytes.
        let bytes = size_in_words
            .checked_mul(word_size)
            .filter(|&bytes| bytes <= isize::MAX as usize)
            .ok_or(ArenaError::CapacityOverflow {
                words: size_in_words,
                word_size,
            })?;

        self.buffer = Some(vec![0u8; bytes].into_boxed_slice());
        self.size_in_words = size_in_words;
        self.free_blocks.push(Block::new(0, size_in_words));

        debug!(words = size_in_words, bytes, "arena initialized");
        Ok(())
    }

    /// Release the arena and forget every block. No-op when unready.
    pub fn shutdown(&mut self) {
        if self.is_ready() {
            self.release();
            debug!("memory manager shut down");
        }
    }

    fn release(&mut self) {
        self.buffer = None;
        self.size_in_words = 0;
        self.free_blocks.clear();
        self.allocated_blocks.clear();
    }

    /// Replace the placement strategy used by subsequent allocations.
    pub fn set_strategy<S>(&mut self, strategy: S)
    where
        S: PlacementStrategy + 'static,
    {
        debug!(
            from = self.strategy.name(),
            to = strategy.name(),
            "placement strategy changed"
        );
        self.strategy = Box::new(strategy);
    }

    /// Name of the active placement strategy.
    pub fn strategy_name(&self) -> &str {
        self.strategy.name()
    }

    // ── Allocation ──────────────────────────────────────────────

    /// Allocate `size_in_bytes`, rounded up to whole words.
    ///
    /// Returns `None` when unready, for a zero-byte request, when the arena
    /// has no holes, when the strategy finds no fit, or when the strategy
    /// names an offset that is not a large-enough hole.
    pub fn allocate(&mut self, size_in_bytes: usize) -> Option<Handle> {
        let base = self.memory_start()?;
        if size_in_bytes == 0 {
            return None;
        }
        if self.free_blocks.is_empty() {
            debug!(size_in_bytes, "allocation failed: no free blocks");
            return None;
        }

        let word_size = self.config.word_size;
        let words_needed = size_in_bytes.div_ceil(word_size);

        let view = FreeListView::from_blocks(&self.free_blocks);
        trace!(view = ?view.as_words(), words_needed, "selecting hole");

        let Some(offset) = self.strategy.select(words_needed, &view) else {
            debug!(words_needed, strategy = self.strategy.name(), "allocation failed: no fit");
            return None;
        };

        let Some(index) = self.free_blocks.iter().position(|b| b.offset == offset) else {
            debug!(offset, "allocation failed: strategy named a non-hole offset");
            return None;
        };
        let hole = &mut self.free_blocks[index];
        if hole.length < words_needed {
            debug!(
                offset,
                hole_len = hole.length,
                words_needed,
                "allocation failed: strategy chose a hole that is too small"
            );
            return None;
        }

        if hole.length == words_needed {
            self.free_blocks.remove(index);
        } else {
            hole.offset += words_needed;
            hole.length -= words_needed;
        }
        self.allocated_blocks
            .insert(offset, Block::new(offset, words_needed));

        debug!(size_in_bytes, words = words_needed, offset, "allocated");
        Some(base.add(offset * word_size))
    }

    /// Return the block starting at `handle` to the free list.
    ///
    /// The handle is translated to a word offset by its byte distance from
    /// the arena base, divided by the word size. Only an allocated block
    /// starting exactly at that word is released; anything else is ignored.
    /// Adjacent holes are coalesced afterwards.
    pub fn free(&mut self, handle: Handle) {
        let Some(base) = self.memory_start() else {
            debug!(%handle, "free ignored: memory manager not initialized");
            return;
        };
        let Some(word) = handle
            .byte_offset_from(base)
            .map(|bytes| bytes / self.config.word_size)
            .filter(|&word| word < self.size_in_words)
        else {
            debug!(%handle, "free ignored: address outside the arena");
            return;
        };
        let Some(block) = self.allocated_blocks.shift_remove(&word) else {
            debug!(word, "free ignored: no allocation starts at this word");
            return;
        };

        self.free_blocks.push(block);
        coalesce(&mut self.free_blocks);
        debug!(offset = block.offset, words = block.length, "freed");
    }

    // ── Data access ─────────────────────────────────────────────

    /// Backing bytes of the live allocation starting at `handle`.
    ///
    /// Unlike [`free`](Self::free), the handle must be word-aligned: an
    /// address inside the first word resolves to `None` here.
    pub fn bytes(&self, handle: Handle) -> Option<&[u8]> {
        let range = self.resolve(handle)?;
        self.buffer.as_deref()?.get(range)
    }

    /// Mutable backing bytes of the live allocation starting at `handle`.
    pub fn bytes_mut(&mut self, handle: Handle) -> Option<&mut [u8]> {
        let range = self.resolve(handle)?;
        self.buffer.as_deref_mut()?.get_mut(range)
    }

    fn resolve(&self, handle: Handle) -> Option<Range<usize>> {
        let word_size = self.config.word_size;
        let bytes = handle.byte_offset_from(self.memory_start()?)?;
        if bytes % word_size != 0 {
            return None;
        }
        let block = self.allocated_blocks.get(&(bytes / word_size))?;
        Some(block.offset * word_size..block.end() * word_size)
    }

    // ── Exports ─────────────────────────────────────────────────

    /// The `[count, offset, length, …]` view a strategy would see now.
    pub fn free_list_view(&self) -> Option<FreeListView> {
        self.is_ready()
            .then(|| FreeListView::from_blocks(&self.free_blocks))
    }

    /// `"[off, len] - [off, len] - …"` in free-list order.
    pub fn hole_map(&self) -> Option<String> {
        self.free_list_view().map(|view| holemap::format(&view))
    }

    /// Write [`hole_map`](Self::hole_map) to `path`.
    pub fn dump_hole_map(&self, path: impl AsRef<Path>) -> Result<(), ExportError> {
        let hole_map = self.hole_map().ok_or(ExportError::NotReady)?;
        holemap::write_to(path.as_ref(), &hole_map)
    }

    /// Length-prefixed allocation bitmap, one bit per word.
    pub fn export_bitmap(&self) -> Option<Vec<u8>> {
        self.is_ready()
            .then(|| bitmap::encode(self.size_in_words, self.allocated_blocks.values()))
    }

    /// Word-by-word rendering of the arena for debugging.
    pub fn debug_dump(&self) -> DebugDump<'_> {
        DebugDump { manager: self }
    }

    // ── Introspection ───────────────────────────────────────────

    /// Whether an arena exists.
    pub fn is_ready(&self) -> bool {
        self.buffer.is_some()
    }

    /// Bytes per word, or 0 when unready.
    pub fn word_size(&self) -> usize {
        if self.is_ready() {
            self.config.word_size
        } else {
            0
        }
    }

    /// Handle of the first arena byte, or `None` when unready.
    pub fn memory_start(&self) -> Option<Handle> {
        self.buffer
            .as_deref()
            .map(|buf| Handle::from_addr(buf.as_ptr() as usize))
    }

    /// Arena capacity in bytes, or 0 when unready.
    pub fn memory_limit(&self) -> usize {
        self.buffer.as_deref().map_or(0, <[u8]>::len)
    }

    /// Arena capacity in words, or 0 when unready.
    pub fn size_in_words(&self) -> usize {
        self.size_in_words
    }

    /// Holes in free-list order.
    pub fn free_blocks(&self) -> &[Block] {
        &self.free_blocks
    }

    /// Live allocations in allocation order.
    pub fn allocated_blocks(&self) -> impl ExactSizeIterator<Item = &Block> + '_ {
        self.allocated_blocks.values()
    }

    /// Total words in holes.
    pub fn free_words(&self) -> usize {
        self.free_blocks.iter().map(|b| b.length).sum()
    }

    /// Total words in live allocations.
    pub fn allocated_words(&self) -> usize {
        self.allocated_blocks.values().map(|b| b.length).sum()
    }

    /// The configuration this manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }
}

impl Drop for MemoryManager {
    fn drop(&mut self) {
        self.shutdown();
    }
}

impl fmt::Debug for MemoryManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryManager")
            .field("word_size", &self.config.word_size)
            .field("size_in_words", &self.size_in_words)
            .field("ready", &self.is_ready())
            .field("free_blocks", &self.free_blocks.as_slice())
            .field("allocated_blocks", &self.allocated_blocks.len())
            .field("strategy", &self.strategy.name())
            .finish()
    }
}

/// Display adapter returned by [`MemoryManager::debug_dump`].
pub struct DebugDump<'a> {
    manager: &'a MemoryManager,
}

impl fmt::Display for DebugDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mm = self.manager;
        writeln!(f, "MemoryManager DEBUG_PRINT")?;
        writeln!(f, "Word Size: {}", mm.config.word_size)?;
        writeln!(f, "Size in Words: {}", mm.size_in_words)?;
        writeln!(f, "Free Blocks:")?;
        for block in &mm.free_blocks {
            writeln!(f, "Offset: {}, Length: {}", block.offset, block.length)?;
        }
        writeln!(f, "Memory Blocks (0=free, 1=allocated):")?;
        for word in 0..mm.size_in_words {
            let state = if mm.free_blocks.iter().any(|b| b.contains(word)) {
                "FREE"
            } else {
                "ALLOCATED"
            };
            writeln!(f, "Word {word}: {state}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{BestFit, WorstFit};

    fn manager(word_size: usize, words: usize) -> MemoryManager {
        let mut mm = MemoryManager::with_word_size(word_size, BestFit).unwrap();
        mm.initialize(words).unwrap();
        mm
    }

    fn offset_of(mm: &MemoryManager, h: Handle) -> usize {
        h.byte_offset_from(mm.memory_start().unwrap()).unwrap() / mm.word_size()
    }

    #[test]
    fn new_manager_is_unready() {
        let mm = MemoryManager::with_word_size(4, BestFit).unwrap();
        assert!(!mm.is_ready());
        assert_eq!(mm.word_size(), 0);
        assert_eq!(mm.memory_limit(), 0);
        assert!(mm.memory_start().is_none());
        assert!(mm.free_list_view().is_none());
        assert!(mm.export_bitmap().is_none());
    }

    #[test]
    fn zero_word_size_rejected() {
        let err = MemoryManager::with_word_size(0, BestFit).unwrap_err();
        assert_eq!(err, ConfigError::InvalidWordSize { word_size: 0 });
    }

    #[test]
    fn initialize_creates_single_hole() {
        let mm = manager(4, 16);
        assert!(mm.is_ready());
        assert_eq!(mm.free_blocks(), &[Block::new(0, 16)]);
        assert_eq!(mm.allocated_blocks().len(), 0);
        assert_eq!(mm.memory_limit(), 64);
        assert_eq!(mm.word_size(), 4);
    }

    #[test]
    fn initialize_rejects_bad_sizes() {
        let mut mm = MemoryManager::with_word_size(1, BestFit).unwrap();
        assert_eq!(mm.initialize(0), Err(ArenaError::EmptyArena));
        assert_eq!(
            mm.initialize(ManagerConfig::MAX_WORDS + 1),
            Err(ArenaError::ArenaTooLarge {
                requested: 65_536,
                max: 65_535
            })
        );
        assert!(!mm.is_ready());
    }

    #[test]
    fn failed_reinitialize_releases_previous_arena() {
        let mut mm = manager(1, 8);
        let _ = mm.allocate(3).unwrap();
        assert!(mm.initialize(0).is_err());
        assert!(!mm.is_ready());
        assert_eq!(mm.allocated_blocks().len(), 0);
    }

    #[test]
    fn reinitialize_resets_lists() {
        let mut mm = manager(2, 8);
        let _ = mm.allocate(6).unwrap();
        mm.initialize(4).unwrap();
        assert_eq!(mm.free_blocks(), &[Block::new(0, 4)]);
        assert_eq!(mm.allocated_blocks().len(), 0);
        assert_eq!(mm.memory_limit(), 8);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut mm = manager(1, 8);
        mm.shutdown();
        assert!(!mm.is_ready());
        mm.shutdown();
        assert!(!mm.is_ready());
        assert!(mm.allocate(1).is_none());
    }

    #[test]
    fn allocate_rounds_up_to_words() {
        let mut mm = manager(4, 16);
        let h = mm.allocate(5).unwrap();
        assert_eq!(offset_of(&mm, h), 0);
        assert_eq!(mm.allocated_blocks().next(), Some(&Block::new(0, 2)));
        assert_eq!(mm.free_blocks(), &[Block::new(2, 14)]);
    }

    #[test]
    fn zero_byte_request_fails() {
        let mut mm = manager(1, 4);
        assert!(mm.allocate(0).is_none());
        assert_eq!(mm.free_blocks(), &[Block::new(0, 4)]);
    }

    #[test]
    fn exact_fit_removes_hole() {
        let mut mm = manager(1, 4);
        let _ = mm.allocate(4).unwrap();
        assert!(mm.free_blocks().is_empty());
        assert!(mm.allocate(1).is_none());
        assert_eq!(mm.hole_map().unwrap(), "");
    }

    #[test]
    fn handle_is_base_plus_scaled_offset() {
        let mut mm = manager(8, 16);
        let base = mm.memory_start().unwrap();
        let a = mm.allocate(8).unwrap();
        let b = mm.allocate(17).unwrap();
        assert_eq!(a, base);
        assert_eq!(b, base.add(8));
        let c = mm.allocate(1).unwrap();
        assert_eq!(c, base.add(4 * 8));
    }

    #[test]
    fn free_coalesces_with_both_neighbours() {
        let mut mm = manager(1, 9);
        let a = mm.allocate(3).unwrap();
        let b = mm.allocate(3).unwrap();
        let c = mm.allocate(3).unwrap();
        mm.free(a);
        mm.free(c);
        assert_eq!(mm.free_blocks(), &[Block::new(0, 3), Block::new(6, 3)]);
        mm.free(b);
        assert_eq!(mm.free_blocks(), &[Block::new(0, 9)]);
    }

    #[test]
    fn free_list_order_after_free_is_by_offset() {
        let mut mm = MemoryManager::with_word_size(1, WorstFit).unwrap();
        mm.initialize(10).unwrap();
        let a = mm.allocate(2).unwrap();
        let _b = mm.allocate(2).unwrap();
        mm.free(a);
        // [4, 6] was the shrunk original hole; [0, 2] came back via free.
        assert_eq!(mm.hole_map().unwrap(), "[0, 2] - [4, 6]");
    }

    #[test]
    fn interior_free_is_ignored() {
        let mut mm = manager(4, 8);
        let h = mm.allocate(12).unwrap();
        mm.free(h.add(4));
        assert_eq!(mm.allocated_blocks().len(), 1);
        assert_eq!(mm.free_blocks(), &[Block::new(3, 5)]);
    }

    #[test]
    fn double_free_is_ignored() {
        let mut mm = manager(1, 8);
        let a = mm.allocate(2).unwrap();
        let _b = mm.allocate(2).unwrap();
        mm.free(a);
        let before = mm.free_blocks().to_vec();
        mm.free(a);
        assert_eq!(mm.free_blocks(), before.as_slice());
    }

    #[test]
    fn out_of_range_handles_are_ignored() {
        let mut mm = manager(2, 4);
        let _ = mm.allocate(2).unwrap();
        let base = mm.memory_start().unwrap();
        mm.free(base.add(8));
        mm.free(Handle::from_addr(base.addr().wrapping_sub(2)));
        assert_eq!(mm.allocated_blocks().len(), 1);
    }

    #[test]
    fn misbehaving_strategy_cannot_corrupt_lists() {
        let mut mm = manager(1, 8);
        // Not the start of any hole.
        mm.set_strategy(|_: usize, _: &FreeListView| Some(3usize));
        assert!(mm.allocate(1).is_none());
        // A real hole, but too small for the request.
        mm.set_strategy(|_: usize, _: &FreeListView| Some(0usize));
        assert!(mm.allocate(9).is_none());
        assert_eq!(mm.free_blocks(), &[Block::new(0, 8)]);
        assert_eq!(mm.allocated_blocks().len(), 0);
    }

    #[test]
    fn set_strategy_applies_to_next_allocation() {
        let mut mm = manager(1, 12);
        let a = mm.allocate(2).unwrap();
        let _b = mm.allocate(1).unwrap();
        let c = mm.allocate(4).unwrap();
        let _d = mm.allocate(1).unwrap();
        mm.free(a);
        mm.free(c);
        // Holes: [0, 2] [3, 4] [8, 4]
        let h = mm.allocate(2).unwrap();
        assert_eq!(offset_of(&mm, h), 0);
        mm.set_strategy(WorstFit);
        assert_eq!(mm.strategy_name(), "worst_fit");
        let h = mm.allocate(1).unwrap();
        assert_eq!(offset_of(&mm, h), 3);
    }

    #[test]
    fn bytes_resolve_only_block_starts() {
        let mut mm = manager(4, 8);
        let h = mm.allocate(6).unwrap();
        assert!(mm.bytes(h).unwrap().iter().all(|&b| b == 0));
        mm.bytes_mut(h).unwrap().copy_from_slice(&[7; 8]);
        assert_eq!(mm.bytes(h).unwrap(), &[7; 8]);
        assert!(mm.bytes(h.add(4)).is_none());
        assert!(mm.bytes(h.add(1)).is_none());
        mm.free(h);
        assert!(mm.bytes(h).is_none());
    }

    #[test]
    fn bitmap_tracks_allocations() {
        let mut mm = manager(1, 10);
        let a = mm.allocate(2).unwrap();
        let _b = mm.allocate(3).unwrap();
        mm.free(a);
        assert_eq!(mm.export_bitmap().unwrap(), vec![2, 0, 0x1C, 0x00]);
    }

    #[test]
    fn debug_dump_lists_every_word() {
        let mut mm = manager(1, 3);
        let _ = mm.allocate(1).unwrap();
        let dump = mm.debug_dump().to_string();
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(
            lines,
            [
                "MemoryManager DEBUG_PRINT",
                "Word Size: 1",
                "Size in Words: 3",
                "Free Blocks:",
                "Offset: 1, Length: 2",
                "Memory Blocks (0=free, 1=allocated):",
                "Word 0: ALLOCATED",
                "Word 1: FREE",
                "Word 2: FREE",
            ]
        );
    }

    #[test]
    fn free_truncates_misaligned_handle_to_its_word() {
        let mut mm = manager(4, 8);
        let h = mm.allocate(8).unwrap();
        assert!(mm.bytes(h.add(1)).is_none());

        mm.free(h.add(1));

        assert_eq!(mm.allocated_blocks().len(), 0);
        assert_eq!(mm.free_blocks(), &[Block::new(0, 8)]);
    }

    #[test]
    fn config_survives_shutdown() {
        let mut mm = manager(4, 8);
        mm.shutdown();
        assert_eq!(mm.word_size(), 0);
        assert_eq!(mm.config(), &ManagerConfig::new(4));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Clone, Debug)]
        enum Op {
            Alloc(usize),
            Free(usize),
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1usize..40).prop_map(Op::Alloc),
                (0usize..32).prop_map(Op::Free),
            ]
        }

        fn check_partition(mm: &MemoryManager) -> Result<(), TestCaseError> {
            let mut all: Vec<Block> = mm.free_blocks().to_vec();
            all.extend(mm.allocated_blocks().copied());
            let total: usize = all.iter().map(|b| b.length).sum();
            prop_assert_eq!(total, mm.size_in_words());
            all.sort_by_key(|b| b.offset);
            for pair in all.windows(2) {
                prop_assert!(!pair[0].overlaps(&pair[1]), "{:?} overlaps {:?}", pair[0], pair[1]);
            }
            Ok(())
        }

        proptest! {
            #[test]
            fn blocks_partition_the_arena(
                word_size in 1usize..9,
                worst in any::<bool>(),
                ops in proptest::collection::vec(op(), 1..60),
            ) {
                let mut mm = MemoryManager::with_word_size(word_size, BestFit).unwrap();
                if worst {
                    mm.set_strategy(WorstFit);
                }
                mm.initialize(64).unwrap();
                let mut live: Vec<Handle> = Vec::new();
                for op in ops {
                    match op {
                        Op::Alloc(bytes) => {
                            if let Some(h) = mm.allocate(bytes) {
                                live.push(h);
                            }
                        }
                        Op::Free(i) if !live.is_empty() => {
                            let h = live.swap_remove(i % live.len());
                            mm.free(h);
                            let holes = mm.free_blocks();
                            for a in holes {
                                for b in holes {
                                    prop_assert!(!a.touches(b), "{:?} touches {:?}", a, b);
                                }
                            }
                        }
                        Op::Free(_) => {}
                    }
                    check_partition(&mm)?;
                }
            }

            #[test]
            fn alloc_then_free_restores_single_hole(
                sizes in proptest::collection::vec(1usize..16, 1..10),
            ) {
                let mut mm = MemoryManager::with_word_size(1, BestFit).unwrap();
                mm.initialize(256).unwrap();
                let handles: Vec<Handle> = sizes.iter().filter_map(|&s| mm.allocate(s)).collect();
                prop_assert_eq!(handles.len(), sizes.len());
                for h in handles.into_iter().rev() {
                    mm.free(h);
                }
                prop_assert_eq!(mm.free_blocks(), &[Block::new(0, 256)]);
            }
        }
    }
}
