// Adjacency Matrix Builder
//
// GraphStore -> CoordinateMatrix. Node i in sorted order owns row/column i;
// edges are emitted in the store's (source, target) order, one triple each.

use std::collections::BTreeMap;

use tracing::debug;

use super::sparse_tensor::SparseTensor;
use crate::domain::{CoordinateMatrix, GraphStore, NodeKey};
use crate::error::Result;

pub struct AdjacencyMatrixBuilder;

impl AdjacencyMatrixBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Row/column labels: `node_order(graph)[i]` is the node at index `i`
    pub fn node_order<N: NodeKey>(&self, graph: &GraphStore<N>) -> Vec<N> {
        graph.nodes().cloned().collect()
    }

    /// Build the sparse adjacency matrix
    ///
    /// Returns `None` when the store has no nodes. Otherwise the shape is
    /// `(N, N)` and there is exactly one triple per stored edge entry.
    pub fn build<N: NodeKey>(&self, graph: &GraphStore<N>) -> Option<CoordinateMatrix> {
        if graph.is_empty() {
            debug!("adjacency build skipped: graph has no nodes");
            return None;
        }

        let index: BTreeMap<&N, usize> = graph
            .nodes()
            .enumerate()
            .map(|(idx, node)| (node, idx))
            .collect();
        let num_nodes = index.len();

        // Edge endpoints are always members of the node set
        let triples = graph
            .edges()
            .map(|(source, target, weight)| (index[source], index[target], weight));
        let coo = CoordinateMatrix::from_triples((num_nodes, num_nodes), triples);

        debug!(
            nodes = num_nodes,
            entries = coo.nnz(),
            directed = graph.is_directed(),
            "adjacency matrix built"
        );
        Some(coo)
    }
}

impl Default for AdjacencyMatrixBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NodeKey> GraphStore<N> {
    /// Sparse adjacency matrix of the current state, `None` if there are no nodes
    pub fn adjacency_matrix(&self) -> Option<CoordinateMatrix> {
        AdjacencyMatrixBuilder::new().build(self)
    }

    /// Adjacency matrix restated as a [`SparseTensor`], `None` if there are no nodes
    pub fn adjacency_tensor(&self) -> Result<Option<SparseTensor>> {
        SparseTensor::from_coo(self.adjacency_matrix().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_graph_yields_none() {
        let graph: GraphStore<u32> = GraphStore::undirected();
        assert!(AdjacencyMatrixBuilder::new().build(&graph).is_none());
    }

    #[test]
    fn test_nodes_without_edges() {
        let mut graph = GraphStore::directed();
        graph.add_node(5);
        graph.add_node(3);

        let coo = graph.adjacency_matrix().unwrap();
        assert_eq!(coo.shape(), (2, 2));
        assert_eq!(coo.nnz(), 0);
    }

    #[test]
    fn test_adjacency_matrix() {
        let mut graph = GraphStore::undirected();
        graph.add_node(1);
        graph.add_node(2);
        graph.add_edge(1, 2);

        let coo = graph.adjacency_matrix().unwrap();
        let dense = coo.to_dense();
        assert_eq!(dense[0][1], 1.0);
        assert_eq!(dense[1][0], 1.0);
    }

    #[test]
    fn test_undirected_triples() {
        let mut graph = GraphStore::undirected();
        graph.add_edge(1, 2);

        let coo = graph.adjacency_matrix().unwrap();
        assert_eq!(coo.shape(), (2, 2));
        assert_eq!(
            coo.triples().collect::<Vec<_>>(),
            vec![(0, 1, 1.0), (1, 0, 1.0)]
        );
    }

    #[test]
    fn test_index_follows_sort_order_not_insertion() {
        let mut graph = GraphStore::directed();
        graph.add_weighted_edge("zeta", "alpha", 2.0);
        graph.add_node("mid");

        let builder = AdjacencyMatrixBuilder::new();
        assert_eq!(builder.node_order(&graph), vec!["alpha", "mid", "zeta"]);

        let coo = builder.build(&graph).unwrap();
        assert_eq!(coo.triples().collect::<Vec<_>>(), vec![(2, 0, 2.0)]);
    }

    #[test]
    fn test_self_loop_on_diagonal() {
        let mut graph = GraphStore::undirected();
        graph.add_weighted_edge(4, 4, 0.5);
        graph.add_node(1);

        let coo = graph.adjacency_matrix().unwrap();
        assert_eq!(coo.triples().collect::<Vec<_>>(), vec![(1, 1, 0.5)]);
    }

    #[test]
    fn test_repeated_builds_identical() {
        let mut graph = GraphStore::undirected();
        graph.add_weighted_edge(3, 1, 0.25);
        graph.add_weighted_edge(2, 3, 4.0);

        let builder = AdjacencyMatrixBuilder::default();
        assert_eq!(builder.build(&graph), builder.build(&graph));
    }

    #[test]
    fn test_adjacency_tensor_empty_graph() {
        let graph: GraphStore<i64> = GraphStore::undirected();
        assert!(graph.adjacency_tensor().unwrap().is_none());
    }

    #[test]
    fn test_adjacency_tensor_shape() {
        let mut graph = GraphStore::undirected();
        graph.add_node(1);
        graph.add_node(2);
        graph.add_edge(1, 2);

        let tensor = graph.adjacency_tensor().unwrap().unwrap();
        assert_eq!(tensor.dense_shape, [2, 2]);
    }
}
