// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::uninlined_format_args)]

//! Core engine for metapath-constrained random walks over heterogeneous
//! networks.
//!
//! A heterogeneous network tags every node with a type, here the first
//! character of its label. A metapath (e.g. `"vapav"`) prescribes the
//! repeating type sequence a walk must follow; the engine samples many
//! bounded-length uniform random walks per qualifying starting node and
//! hands back one batch per node, in a stable order.
//!
//! - [`NetworkIndex`] - immutable per-node, per-edge-type adjacency lists
//! - [`Metapath`] - validated metapath, compiled into a [`CompiledPath`]
//! - [`generate_walks`] - the sampling kernel for one starting node
//! - [`run_walks`] - fans the kernel out over a bounded rayon pool
//!
//! # Example
//!
//! ```rust
//! use std::sync::atomic::AtomicUsize;
//! use mpwalk_core::{Metapath, NetworkIndex, WalkConfig, run_walks};
//!
//! let mut index = NetworkIndex::new();
//! index.ingest_line("v1 a1").unwrap();
//! index.ingest_line("a1 v1").unwrap();
//!
//! let mut config = WalkConfig::new("vav".parse::<Metapath>().unwrap());
//! config.num_walks = 2;
//! config.walk_length = 4;
//!
//! let completed = AtomicUsize::new(0);
//! let batches = run_walks(&index, &config, &completed);
//! assert_eq!(batches.len(), 1); // one starting node: v1
//! assert_eq!(batches[0].walks.len(), 2);
//! ```

mod error;
mod metapath;
mod network;
mod scheduler;
mod walk;

pub use error::{Error, Result};
pub use metapath::{CompiledPath, Metapath};
pub use network::{IngestReport, NetworkIndex, NetworkStats, NodeId};
pub use scheduler::{run_walks, NodeBatch, WalkConfig};
pub use walk::{generate_walks, ExcludeSet, Walk};

// Re-export rayon so callers can configure the worker pool
pub use rayon;
