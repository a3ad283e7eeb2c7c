//! Planar output graph: Voronoi vertices and the edges between them.
//!
//! Nodes are append-only positions; edges are stored symmetrically in both
//! adjacency lists to represent an undirected relationship, with an optional
//! per-edge payload. Index arguments out of range are caller programming
//! errors and panic.

use crate::types::Position;

/// A directed edge record as returned by adjacency queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeData<D = ()> {
    pub start: usize,
    pub end: usize,
    pub data: D,
}

#[derive(Debug, Clone)]
struct AdjacentNode<D> {
    end: usize,
    data: D,
}

/// The planar graph produced by the sweep.
#[derive(Debug, Clone, Default)]
pub struct Graph<D = ()> {
    nodes: Vec<Position>,
    adjacency: Vec<Vec<AdjacentNode<D>>>,
}

impl<D: Clone> Graph<D> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            adjacency: Vec::new(),
        }
    }

    /// Number of nodes.
    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn num_edges(&self) -> usize {
        let directed: usize = self.adjacency.iter().map(|adj| adj.len()).sum();
        directed / 2
    }

    /// Position of a node.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn node(&self, index: usize) -> Position {
        self.nodes[index]
    }

    /// All node positions in insertion order.
    #[inline]
    pub fn nodes(&self) -> &[Position] {
        &self.nodes
    }

    /// Append a node, returning its index.
    pub fn add_node(&mut self, position: Position) -> usize {
        self.nodes.push(position);
        self.adjacency.push(Vec::new());
        self.nodes.len() - 1
    }

    /// Add an undirected edge between two nodes.
    ///
    /// A no-op when the edge already exists or when `start == end` (a
    /// zero-length edge between coincident vertices carries no information).
    /// Returns `true` if the edge was inserted.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn add_edge(&mut self, start: usize, end: usize, data: D) -> bool {
        assert!(start < self.nodes.len(), "start node {} out of range", start);
        assert!(end < self.nodes.len(), "end node {} out of range", end);

        if start == end || self.is_connected(start, end) {
            return false;
        }

        self.adjacency[start].push(AdjacentNode {
            end,
            data: data.clone(),
        });
        self.adjacency[end].push(AdjacentNode { end: start, data });
        true
    }

    /// Whether an edge exists between two nodes.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn is_connected(&self, start: usize, end: usize) -> bool {
        assert!(start < self.nodes.len(), "start node {} out of range", start);
        assert!(end < self.nodes.len(), "end node {} out of range", end);
        self.adjacency[start].iter().any(|adj| adj.end == end)
    }

    /// All edges leaving a node.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn edges(&self, index: usize) -> Vec<EdgeData<D>> {
        self.adjacency[index]
            .iter()
            .map(|adj| EdgeData {
                start: index,
                end: adj.end,
                data: adj.data.clone(),
            })
            .collect()
    }

    /// The edge between two nodes, if present.
    ///
    /// # Panics
    /// Panics if either index is out of range.
    pub fn edge_data(&self, start: usize, end: usize) -> Option<EdgeData<D>> {
        assert!(start < self.nodes.len(), "start node {} out of range", start);
        assert!(end < self.nodes.len(), "end node {} out of range", end);
        self.adjacency[start]
            .iter()
            .find(|adj| adj.end == end)
            .map(|adj| EdgeData {
                start,
                end: adj.end,
                data: adj.data.clone(),
            })
    }

    /// Degree of a node.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    #[inline]
    pub fn degree(&self, index: usize) -> usize {
        self.adjacency[index].len()
    }
}
