//! Benchmark workloads and utilities for wordarena.
//!
//! Provides deterministic allocate/free scripts for benchmarks and the demo
//! driver:
//!
//! - [`Workload::generate`]: seeded mix of allocations and frees
//! - [`run_workload`]: replay a script against a manager, collecting stats

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use wordarena::{Handle, MemoryManager};

/// One scripted step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    /// Allocate this many bytes.
    Alloc(usize),
    /// Free the live allocation at this index (modulo the live count).
    Free(usize),
}

/// A reproducible allocate/free script.
#[derive(Clone, Debug)]
pub struct Workload {
    pub ops: Vec<Op>,
}

impl Workload {
    /// Generate `len` operations from `seed`.
    ///
    /// Roughly three allocations per two frees, request sizes uniform in
    /// `1..=max_bytes`.
    pub fn generate(seed: u64, len: usize, max_bytes: usize) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let max_bytes = max_bytes.max(1) as u32;
        let ops = (0..len)
            .map(|_| {
                if rng.next_u32() % 5 < 3 {
                    Op::Alloc(1 + (rng.next_u32() % max_bytes) as usize)
                } else {
                    Op::Free(rng.next_u32() as usize)
                }
            })
            .collect();
        Self { ops }
    }
}

/// Outcome counters for one [`run_workload`] pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorkloadStats {
    pub allocated: usize,
    pub failed: usize,
    pub freed: usize,
    /// Most holes seen at once.
    pub peak_holes: usize,
    /// Live allocations left at the end.
    pub live: usize,
}

/// Replay `workload` against `mm`, which must already be initialized.
///
/// Live handles are returned alongside the stats so callers can inspect or
/// release them.
pub fn run_workload(mm: &mut MemoryManager, workload: &Workload) -> (WorkloadStats, Vec<Handle>) {
    let mut stats = WorkloadStats::default();
    let mut live: Vec<Handle> = Vec::new();
    for op in &workload.ops {
        match *op {
            Op::Alloc(bytes) => match mm.allocate(bytes) {
                Some(h) => {
                    live.push(h);
                    stats.allocated += 1;
                }
                None => stats.failed += 1,
            },
            Op::Free(i) if !live.is_empty() => {
                let h = live.swap_remove(i % live.len());
                mm.free(h);
                stats.freed += 1;
            }
            Op::Free(_) => {}
        }
        stats.peak_holes = stats.peak_holes.max(mm.free_blocks().len());
    }
    stats.live = live.len();
    (stats, live)
}
