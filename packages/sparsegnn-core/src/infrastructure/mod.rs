//! Matrix construction and tensor export over the domain types

pub mod adjacency_builder;
pub mod sparse_tensor;

pub use adjacency_builder::AdjacencyMatrixBuilder;
pub use sparse_tensor::SparseTensor;
