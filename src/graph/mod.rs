//! Co-occurrence graph construction
//!
//! The graph is unweighted and undirected: two tokens are adjacent when they
//! share at least one sliding window. Storage is abstracted behind
//! [`CooccurrenceGraph`], implemented by a dense adjacency matrix and a sparse
//! edge list that behave identically.

pub mod edge_list;
pub mod matrix;
pub mod pairs;
pub mod positions;

use crate::errors::{Result, TextRankError};
use crate::types::{Incidence, PositionWeights, TokenId};
use positions::PositionIndex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub use edge_list::EdgeListGraph;
pub use matrix::AdjacencyMatrixGraph;
pub use pairs::extract_pairs;

/// Capability set shared by every graph storage strategy.
///
/// Ranking code depends only on this trait. A graph is filled once and is
/// read-only while a ranker borrows it.
pub trait CooccurrenceGraph: fmt::Debug + Send + Sync {
    /// All vertices, in order of first insertion
    fn vertices(&self) -> &[TokenId];

    /// Check whether `vertex` is in the graph
    fn contains(&self, vertex: TokenId) -> bool;

    /// Register a vertex without edges. Returns `true` if it was new.
    fn add_vertex(&mut self, vertex: TokenId) -> bool;

    /// Connect two distinct vertices, inserting them if needed.
    ///
    /// Re-adding an existing edge is a no-op. Self-loops are rejected with
    /// `InvalidInput`.
    fn add_edge(&mut self, vertex1: TokenId, vertex2: TokenId) -> Result<()>;

    /// Adjacency between two vertices; `Unknown` if either is absent
    fn is_incidental(&self, vertex1: TokenId, vertex2: TokenId) -> Incidence;

    /// Number of distinct neighbors of `vertex`
    fn calculate_inout_score(&self, vertex: TokenId) -> Result<usize>;

    /// Neighbors of `vertex`
    fn neighbors(&self, vertex: TokenId) -> Result<Vec<TokenId>>;

    /// Number of undirected edges
    fn edge_count(&self) -> usize;

    fn position_index(&self) -> &PositionIndex;

    fn position_index_mut(&mut self) -> &mut PositionIndex;

    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Populate vertices and edges from a token sequence.
    ///
    /// Input is validated by [`extract_pairs`] before anything is inserted,
    /// so a rejected call leaves the graph untouched. Every token becomes a
    /// vertex (in sequence order) even if it shares no window with another
    /// token.
    fn fill_from_tokens(&mut self, tokens: &[TokenId], window_length: usize) -> Result<()> {
        let pairs = extract_pairs(tokens, window_length)?;

        for &token in tokens {
            self.add_vertex(token);
        }
        for pair in pairs {
            self.add_edge(pair.first(), pair.second())?;
        }
        Ok(())
    }

    /// Record the index of every token occurrence
    fn fill_positions(&mut self, tokens: &[TokenId]) {
        self.position_index_mut().fill(tokens);
    }

    /// Normalize position-derived weights over all vertices
    fn calculate_position_weights(&mut self) -> Result<()> {
        let vertices = self.vertices().to_vec();
        self.position_index_mut().calculate_weights(&vertices)
    }

    fn position_weights(&self) -> &PositionWeights {
        self.position_index().weights()
    }

    /// Occurrence positions recorded for `vertex`
    fn positions(&self, vertex: TokenId) -> Option<&[usize]> {
        self.position_index().positions_of(vertex)
    }
}

/// Which storage strategy backs a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphStrategy {
    /// Dense adjacency matrix, O(V²) space
    AdjacencyMatrix,
    /// Sparse per-vertex adjacency lists, O(V + E) space
    #[default]
    EdgeList,
}

impl GraphStrategy {
    /// Create an empty graph of this strategy
    pub fn build(self) -> Box<dyn CooccurrenceGraph> {
        match self {
            GraphStrategy::AdjacencyMatrix => Box::new(AdjacencyMatrixGraph::new()),
            GraphStrategy::EdgeList => Box::new(EdgeListGraph::new()),
        }
    }

    /// Create a graph of this strategy filled from `tokens`
    pub fn build_from_tokens(
        self,
        tokens: &[TokenId],
        window_length: usize,
    ) -> Result<Box<dyn CooccurrenceGraph>> {
        let mut graph = self.build();
        graph.fill_from_tokens(tokens, window_length)?;
        Ok(graph)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphStrategy::AdjacencyMatrix => "adjacency_matrix",
            GraphStrategy::EdgeList => "edge_list",
        }
    }
}

impl std::str::FromStr for GraphStrategy {
    type Err = TextRankError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "adjacency_matrix" | "adjacencymatrix" | "matrix" | "dense" => {
                Ok(GraphStrategy::AdjacencyMatrix)
            }
            "edge_list" | "edgelist" | "list" | "sparse" => Ok(GraphStrategy::EdgeList),
            other => Err(TextRankError::invalid_config(format!(
                "unknown graph strategy '{other}'"
            ))),
        }
    }
}

impl fmt::Display for GraphStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
