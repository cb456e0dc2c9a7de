//! Placement strategies.
//!
//! A strategy decides which hole satisfies an allocation. It sees only the
//! serialized [`FreeListView`] and answers with the starting offset of the
//! chosen hole, or `None` when nothing qualifies. The manager re-validates
//! every answer, so a misbehaving strategy can make an allocation fail but
//! cannot corrupt the block lists.

use crate::view::FreeListView;

/// A block-placement policy.
///
/// # Contract
///
/// - The returned offset must name a block in `view` whose length is at
///   least `words_needed`.
/// - `view` is read-only.
/// - Return `None` for an empty view or `words_needed == 0`.
///
/// Closures of the shape `Fn(usize, &FreeListView) -> Option<usize>` are
/// strategies too, so an external function can be injected directly:
///
/// ```
/// use wordarena::{FreeListView, PlacementStrategy};
///
/// let first_fit = |words: usize, view: &FreeListView| {
///     view.iter().find(|&(_, len)| words > 0 && len >= words).map(|(off, _)| off)
/// };
/// let view = FreeListView::from_words(vec![2, 0, 1, 4, 8]);
/// assert_eq!(first_fit.select(3, &view), Some(4));
/// ```
pub trait PlacementStrategy: Send {
    /// Choose a hole for `words_needed` words.
    fn select(&self, words_needed: usize, view: &FreeListView) -> Option<usize>;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> PlacementStrategy for F
where
    F: Fn(usize, &FreeListView) -> Option<usize> + Send,
{
    fn select(&self, words_needed: usize, view: &FreeListView) -> Option<usize> {
        self(words_needed, view)
    }
}

/// Smallest qualifying hole; ties go to the first in view order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BestFit;

impl PlacementStrategy for BestFit {
    fn select(&self, words_needed: usize, view: &FreeListView) -> Option<usize> {
        best_fit(words_needed, view)
    }

    fn name(&self) -> &str {
        "best_fit"
    }
}

/// Largest qualifying hole; ties go to the first in view order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WorstFit;

impl PlacementStrategy for WorstFit {
    fn select(&self, words_needed: usize, view: &FreeListView) -> Option<usize> {
        worst_fit(words_needed, view)
    }

    fn name(&self) -> &str {
        "worst_fit"
    }
}

/// Offset of the smallest hole holding `words_needed` words.
pub fn best_fit(words_needed: usize, view: &FreeListView) -> Option<usize> {
    if words_needed == 0 || view.is_empty() {
        return None;
    }
    let mut best: Option<(usize, usize)> = None;
    for (offset, length) in view.iter() {
        if length < words_needed {
            continue;
        }
        // Strict comparison keeps the first of equal candidates.
        if best.is_none_or(|(_, best_len)| length < best_len) {
            best = Some((offset, length));
        }
    }
    best.map(|(offset, _)| offset)
}

/// Offset of the largest hole holding `words_needed` words.
pub fn worst_fit(words_needed: usize, view: &FreeListView) -> Option<usize> {
    if words_needed == 0 || view.is_empty() {
        return None;
    }
    let mut worst: Option<(usize, usize)> = None;
    for (offset, length) in view.iter() {
        if length < words_needed {
            continue;
        }
        if worst.is_none_or(|(_, worst_len)| length > worst_len) {
            worst = Some((offset, length));
        }
    }
    worst.map(|(offset, _)| offset)
}
