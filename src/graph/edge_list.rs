//! Sparse edge-list graph
//!
//! Each vertex keeps its neighbor list; a set of canonical pairs makes edge
//! insertion idempotent in O(1) amortized time.

use super::positions::PositionIndex;
use super::CooccurrenceGraph;
use crate::errors::{Result, TextRankError};
use crate::types::{Incidence, Pair, TokenId};
use rustc_hash::{FxHashMap, FxHashSet};

/// A vertex and its adjacency list
#[derive(Debug, Clone)]
pub struct EdgeListNode {
    /// The token this vertex represents
    pub token: TokenId,
    /// Neighbors in edge insertion order
    pub neighbors: Vec<TokenId>,
}

impl EdgeListNode {
    /// Create a new node without neighbors
    pub fn new(token: TokenId) -> Self {
        Self {
            token,
            neighbors: Vec::new(),
        }
    }
}

/// Co-occurrence graph stored as adjacency lists
#[derive(Debug, Clone, Default)]
pub struct EdgeListGraph {
    /// Maps token -> node index
    token_to_index: FxHashMap<TokenId, usize>,
    /// Vertices in insertion order
    vertices: Vec<TokenId>,
    /// Node storage, parallel to `vertices`
    nodes: Vec<EdgeListNode>,
    /// Every undirected edge, canonicalized
    edges: FxHashSet<Pair>,
    positions: PositionIndex,
}

impl EdgeListGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(vertex_capacity: usize, edge_capacity: usize) -> Self {
        Self {
            token_to_index: FxHashMap::with_capacity_and_hasher(
                vertex_capacity,
                Default::default(),
            ),
            vertices: Vec::with_capacity(vertex_capacity),
            nodes: Vec::with_capacity(vertex_capacity),
            edges: FxHashSet::with_capacity_and_hasher(edge_capacity, Default::default()),
            positions: PositionIndex::default(),
        }
    }

    /// Get a node by token
    pub fn get_node(&self, vertex: TokenId) -> Option<&EdgeListNode> {
        self.token_to_index.get(&vertex).map(|&i| &self.nodes[i])
    }

    /// Iterate over all nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &EdgeListNode> {
        self.nodes.iter()
    }

    fn node(&self, vertex: TokenId) -> Result<&EdgeListNode> {
        self.get_node(vertex)
            .ok_or_else(|| TextRankError::unknown_vertex(vertex))
    }

    fn get_or_insert(&mut self, vertex: TokenId) -> usize {
        if let Some(&i) = self.token_to_index.get(&vertex) {
            return i;
        }

        let i = self.nodes.len();
        self.token_to_index.insert(vertex, i);
        self.vertices.push(vertex);
        self.nodes.push(EdgeListNode::new(vertex));
        i
    }
}

impl CooccurrenceGraph for EdgeListGraph {
    fn vertices(&self) -> &[TokenId] {
        &self.vertices
    }

    fn contains(&self, vertex: TokenId) -> bool {
        self.token_to_index.contains_key(&vertex)
    }

    fn add_vertex(&mut self, vertex: TokenId) -> bool {
        if self.contains(vertex) {
            return false;
        }
        self.get_or_insert(vertex);
        true
    }

    fn add_edge(&mut self, vertex1: TokenId, vertex2: TokenId) -> Result<()> {
        let pair = Pair::new(vertex1, vertex2).ok_or_else(|| {
            TextRankError::invalid_input(format!("self-loop on vertex {vertex1} is not allowed"))
        })?;

        let i = self.get_or_insert(vertex1);
        let j = self.get_or_insert(vertex2);
        if self.edges.insert(pair) {
            self.nodes[i].neighbors.push(vertex2);
            self.nodes[j].neighbors.push(vertex1);
        }
        Ok(())
    }

    fn is_incidental(&self, vertex1: TokenId, vertex2: TokenId) -> Incidence {
        if !self.contains(vertex1) || !self.contains(vertex2) {
            return Incidence::Unknown;
        }
        match Pair::new(vertex1, vertex2) {
            Some(pair) if self.edges.contains(&pair) => Incidence::Adjacent,
            _ => Incidence::NotAdjacent,
        }
    }

    fn calculate_inout_score(&self, vertex: TokenId) -> Result<usize> {
        Ok(self.node(vertex)?.neighbors.len())
    }

    fn neighbors(&self, vertex: TokenId) -> Result<Vec<TokenId>> {
        Ok(self.node(vertex)?.neighbors.clone())
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn position_index(&self) -> &PositionIndex {
        &self.positions
    }

    fn position_index_mut(&mut self) -> &mut PositionIndex {
        &mut self.positions
    }
}
