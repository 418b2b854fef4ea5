//! # Lazy grouping over cursor-based sequences
//!
//! This library splits a sequence into *groupings*: maximal runs of
//! consecutive elements whose projected criteria are equivalent.
//!
//! ## Core Algorithm
//!
//! 1. **Initial scan**: construction projects the first element once and
//!    scans only as far as the first grouping's boundary
//! 2. **Lazy boundaries**: every later grouping is found by one boundary scan
//!    per `advance` (or `retreat`), never re-projecting the element a
//!    criterion came from
//! 3. **Capability dispatch**: forward-only contexts get an engine with a
//!    sentinel terminal; bidirectional contexts get one that also steps back
//! 4. **Single-slot cache**: each position keeps at most one criterion
//!
//! ## Usage Example
//!
//! ```
//! use regroup::{group_runs, SliceContext};
//!
//! let items = [1, 1, 2, 2, 2, 3];
//! let runs = group_runs(SliceContext::range(&items));
//! let groupings: Vec<Vec<i32>> = runs
//!     .iter()
//!     .map(|grouping| grouping.copied().collect())
//!     .collect();
//! assert_eq!(groupings, vec![vec![1, 1], vec![2, 2, 2], vec![3]]);
//!
//! // Bidirectional contexts can be walked from the back as well.
//! let last = runs.iter().next_back().map(|grouping| grouping.count());
//! assert_eq!(last, Some(1));
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules
pub mod context;   // Sequence contexts and bounded views
pub mod relation;  // Projections and equivalence relations
pub mod group;     // Grouping engines and entry points

// Line grouping built on the core
pub mod config;    // Grouping configuration
pub mod report;    // Run summaries and run-length encoding

// Re-exports for convenience
pub use config::{ConfigError, GroupingConfig, KeySelector};
pub use context::{
    Bidirectional, BidirectionalContext, Bounded, Context, ForwardOnly, Ints, IterContext,
    IterCursor, SliceContext,
};
pub use group::{
    group, group_by, group_runs, group_with, Assemble, BidirectionalGroupContext, BidirectionalGroupCursor,
    ForwardGroupContext, GroupCursor, GroupPosition, GroupRange, GroupSentinel, Grouped, Groups,
};
pub use relation::{EqualTo, Equivalence, Identity, Projection};
