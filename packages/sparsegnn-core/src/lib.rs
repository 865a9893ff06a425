//! sparsegnn-core - graph container and sparse adjacency export
//!
//! > Mutate a `GraphStore`, then read it out as a deterministic COO matrix.
//!
//! ## Core Principles
//!
//! 1. **Symmetric undirected edges**: `(a, b)` and `(b, a)` are stored, updated and removed together
//! 2. **Stable indexing**: node `i` in sorted order owns row/column `i`, on every build and every run
//! 3. **Explicit absence**: a graph with no nodes has no matrix (`None`), never a `(0, 0)` one
//!
//! ## Usage
//!
//! ```rust
//! use sparsegnn_core::{AdjacencyMatrixBuilder, GraphStore};
//!
//! let mut graph = GraphStore::undirected();
//! graph.add_node(1);
//! graph.add_node(2);
//! graph.add_edge(1, 2);
//!
//! let coo = AdjacencyMatrixBuilder::new().build(&graph).expect("graph has nodes");
//! assert_eq!(coo.shape(), (2, 2));
//! assert_eq!(coo.triples().collect::<Vec<_>>(), vec![(0, 1, 1.0), (1, 0, 1.0)]);
//!
//! // Tensor-library layout: i64 index pairs, f32 values
//! let tensor = graph.adjacency_tensor()?.expect("graph has nodes");
//! assert_eq!(tensor.indices, vec![[0, 1], [1, 0]]);
//! assert_eq!(tensor.dense_shape, [2, 2]);
//! # Ok::<(), sparsegnn_core::GraphError>(())
//! ```
//!
//! The store is not internally synchronized; share it across threads behind
//! an external lock.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use config::{ConfigError, GraphConfig};
pub use domain::{CoordinateMatrix, EdgeKey, GraphStore, NodeKey};
pub use error::{ErrorKind, GraphError, Result};
pub use infrastructure::{AdjacencyMatrixBuilder, SparseTensor};
