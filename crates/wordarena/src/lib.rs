//! Word-addressed arena simulator with pluggable block placement.
//!
//! Models allocate/free over a fixed-size, zero-initialized byte buffer
//! without touching real process memory. Every offset and length is measured
//! in words of a configurable size. The choice of which hole satisfies a
//! request is delegated to a [`PlacementStrategy`] that sees only a
//! serialized [`FreeListView`] of the free list.
//!
//! # Architecture
//!
//! ```text
//! MemoryManager
//! ├── Box<[u8]>            backing buffer, created by initialize()
//! ├── free blocks          Block { offset, length } in words
//! ├── allocated blocks     keyed by starting offset
//! └── Box<dyn PlacementStrategy>
//!         ▲
//!         └── FreeListView [count, off₁, len₁, …]  (16-bit)
//!
//! SharedManager = Arc<Mutex<MemoryManager>>
//! ```
//!
//! # Exports
//!
//! - Hole map: `"[off, len] - [off, len] - …"` ([`holemap`]).
//! - Free-list view: the strategy input, as `u16` words or LE bytes ([`view`]).
//! - Bitmap: LE `u16` byte count + one bit per word, 1 = allocated ([`bitmap`]).
//!
//! # Diagnostics
//!
//! Lifecycle and allocation outcomes are emitted as `tracing` events at
//! `debug` and `trace` level. Nothing is printed unless the embedding
//! application installs a subscriber.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bitmap;
pub mod block;
pub mod config;
pub mod error;
pub mod handle;
pub mod holemap;
pub mod manager;
pub mod shared;
pub mod strategy;
pub mod view;

// Public re-exports for the primary API surface.
pub use block::Block;
pub use config::{ConfigError, ManagerConfig};
pub use error::{ArenaError, ExportError};
pub use handle::Handle;
pub use manager::{DebugDump, MemoryManager};
pub use shared::SharedManager;
pub use strategy::{best_fit, worst_fit, BestFit, PlacementStrategy, WorstFit};
pub use view::FreeListView;
