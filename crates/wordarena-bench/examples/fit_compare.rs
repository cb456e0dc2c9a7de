//! Compare best-fit and worst-fit on the same seeded workload.
//!
//! Diagnostics are off unless requested; run with e.g.
//! `RUST_LOG=wordarena=debug cargo run --example fit_compare` to see every
//! allocation decision.

use tracing_subscriber::EnvFilter;
use wordarena::{BestFit, MemoryManager, PlacementStrategy, WorstFit};
use wordarena_bench::{run_workload, Workload};

const ARENA_WORDS: usize = 1024;
const WORD_SIZE: usize = 8;

fn run<S: PlacementStrategy + 'static>(strategy: S, workload: &Workload) {
    let mut mm = MemoryManager::with_word_size(WORD_SIZE, strategy).unwrap();
    mm.initialize(ARENA_WORDS).unwrap();

    let (stats, _live) = run_workload(&mut mm, workload);

    println!("--- {} ---", mm.strategy_name());
    println!(
        "  allocated {} / failed {} / freed {} / live {}",
        stats.allocated, stats.failed, stats.freed, stats.live
    );
    println!(
        "  free words {} in {} holes (peak {})",
        mm.free_words(),
        mm.free_blocks().len(),
        stats.peak_holes
    );
    let largest = mm.free_blocks().iter().map(|b| b.length).max().unwrap_or(0);
    println!("  largest hole {largest} words");
    println!("  holes: {}", mm.hole_map().unwrap());
    println!();
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== wordarena placement comparison ===\n");
    let workload = Workload::generate(42, 4_000, 512);
    println!(
        "workload: {} ops over {ARENA_WORDS} words of {WORD_SIZE} bytes\n",
        workload.ops.len()
    );

    run(BestFit, &workload);
    run(WorstFit, &workload);
}
