// Graph Store - nodes plus weighted edges
//
// Both containers are ordered (BTreeSet / BTreeMap), so node iteration is
// always sorted and edge iteration is sorted by (source, target). Nothing
// depends on hashing or insertion history.

use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use super::NodeKey;
use crate::config::{ConfigResult, GraphConfig, DEFAULT_EDGE_WEIGHT};

/// Ordered (source, target) pair identifying a stored edge
pub type EdgeKey<N> = (N, N);

/// In-memory graph container, directed or undirected
///
/// Undirected stores keep both `(a, b)` and `(b, a)` with the same weight and
/// mutate them together. Every edge endpoint is also a member of the node set.
///
/// # Example
/// ```
/// use sparsegnn_core::GraphStore;
///
/// let mut graph = GraphStore::undirected();
/// graph.add_weighted_edge(1, 2, 0.5);
///
/// assert_eq!(graph.edge_list(), vec![(1, 2), (2, 1)]);
/// assert_eq!(graph.edge_weight(&2, &1), Some(0.5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GraphStore<N: NodeKey> {
    nodes: BTreeSet<N>,
    edges: BTreeMap<EdgeKey<N>, f64>,
    directed: bool,
    default_weight: f64,
}

impl<N: NodeKey> GraphStore<N> {
    /// Create an empty store; `directed` is fixed for the store's lifetime
    pub fn new(directed: bool) -> Self {
        Self {
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
            directed,
            default_weight: DEFAULT_EDGE_WEIGHT,
        }
    }

    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    /// Create an empty store from validated settings
    pub fn with_config(config: GraphConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            default_weight: config.default_weight,
            ..Self::new(config.directed)
        })
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Weight used by [`add_edge`](Self::add_edge)
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    // ============================================================
    // Mutation
    // ============================================================

    /// Insert a node; no-op if already present
    pub fn add_node(&mut self, node: N) {
        if self.nodes.insert(node) {
            trace!(nodes = self.nodes.len(), "node added");
        }
    }

    /// Insert an edge with the store's default weight
    pub fn add_edge(&mut self, source: N, target: N) {
        self.add_weighted_edge(source, target, self.default_weight);
    }

    /// Insert or overwrite an edge; both endpoints join the node set
    pub fn add_weighted_edge(&mut self, source: N, target: N, weight: f64) {
        trace!(?source, ?target, weight, "edge set");

        self.nodes.insert(source.clone());
        self.nodes.insert(target.clone());

        if !self.directed && source != target {
            self.edges.insert((target.clone(), source.clone()), weight);
        }
        self.edges.insert((source, target), weight);
    }

    /// Remove a node and every edge touching it (either position, any mode)
    pub fn remove_node(&mut self, node: &N) {
        if !self.nodes.remove(node) {
            return;
        }
        let before = self.edges.len();
        self.edges
            .retain(|(source, target), _| source != node && target != node);
        trace!(?node, dropped_edges = before - self.edges.len(), "node removed");
    }

    /// Remove an edge (and its reverse when undirected); nodes are kept
    pub fn remove_edge(&mut self, source: &N, target: &N) {
        let key = (source.clone(), target.clone());
        self.edges.remove(&key);
        if !self.directed {
            let (source, target) = key;
            self.edges.remove(&(target, source));
        }
    }

    // ============================================================
    // Queries
    // ============================================================

    /// Nodes in strictly increasing order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Stored edge entries; an undirected edge counts twice (once for a self-loop)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, node: &N) -> bool {
        self.nodes.contains(node)
    }

    pub fn contains_edge(&self, source: &N, target: &N) -> bool {
        self.edge_weight(source, target).is_some()
    }

    pub fn edge_weight(&self, source: &N, target: &N) -> Option<f64> {
        self.edges.get(&(source.clone(), target.clone())).copied()
    }

    /// Edge keys sorted by (source, target); undirected edges appear in both directions
    pub fn edge_list(&self) -> Vec<EdgeKey<N>> {
        self.edges.keys().cloned().collect()
    }

    /// (source, target, weight) in the same order as [`edge_list`](Self::edge_list)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, f64)> + '_ {
        self.edges
            .iter()
            .map(|((source, target), weight)| (source, target, *weight))
    }
}

impl<N: NodeKey> Default for GraphStore<N> {
    fn default() -> Self {
        Self::undirected()
    }
}
