//! Domain layer
//!
//! # Domain Models
//!
//! - `GraphStore`: node set plus weighted edge map, directed or undirected
//! - `CoordinateMatrix`: immutable sparse adjacency export in COO form
//!
//! Both are plain in-memory values with no I/O.

pub mod coordinate;
pub mod graph_store;

pub use coordinate::CoordinateMatrix;
pub use graph_store::{EdgeKey, GraphStore};

use std::fmt::Debug;

/// Node identifier capability
///
/// Index assignment sorts nodes, so identifiers must be totally ordered.
/// Types without an `Ord` impl (e.g. `f64`) are rejected at compile time.
pub trait NodeKey: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> NodeKey for T {}
