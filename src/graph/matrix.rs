//! Dense adjacency-matrix graph
//!
//! Vertices are indexed by insertion order. Adding a vertex grows the square
//! matrix by one row and one column; existing cells are never moved or reset.

use super::positions::PositionIndex;
use super::CooccurrenceGraph;
use crate::errors::{Result, TextRankError};
use crate::types::{Incidence, TokenId};
use rustc_hash::FxHashMap;

/// Co-occurrence graph stored as a `V x V` boolean matrix
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMatrixGraph {
    /// Vertices in insertion order; position == matrix index
    vertices: Vec<TokenId>,
    /// Maps token -> matrix index
    index: FxHashMap<TokenId, usize>,
    /// Row-major adjacency; always square
    matrix: Vec<Vec<bool>>,
    edge_count: usize,
    positions: PositionIndex,
}

impl AdjacencyMatrixGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with room for `vertex_capacity` vertices before the
    /// vertex list and index reallocate
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            index: FxHashMap::with_capacity_and_hasher(vertex_capacity, Default::default()),
            matrix: Vec::with_capacity(vertex_capacity),
            ..Self::default()
        }
    }

    fn index_of(&self, vertex: TokenId) -> Option<usize> {
        self.index.get(&vertex).copied()
    }

    fn row(&self, vertex: TokenId) -> Result<&[bool]> {
        self.index_of(vertex)
            .map(|i| self.matrix[i].as_slice())
            .ok_or_else(|| TextRankError::unknown_vertex(vertex))
    }

    /// Insert a vertex and return its matrix index
    fn get_or_insert(&mut self, vertex: TokenId) -> usize {
        if let Some(i) = self.index_of(vertex) {
            return i;
        }

        let i = self.vertices.len();
        self.vertices.push(vertex);
        self.index.insert(vertex, i);
        for row in &mut self.matrix {
            row.push(false);
        }
        self.matrix.push(vec![false; i + 1]);
        i
    }
}

impl CooccurrenceGraph for AdjacencyMatrixGraph {
    fn vertices(&self) -> &[TokenId] {
        &self.vertices
    }

    fn contains(&self, vertex: TokenId) -> bool {
        self.index.contains_key(&vertex)
    }

    fn add_vertex(&mut self, vertex: TokenId) -> bool {
        if self.contains(vertex) {
            return false;
        }
        self.get_or_insert(vertex);
        true
    }

    fn add_edge(&mut self, vertex1: TokenId, vertex2: TokenId) -> Result<()> {
        if vertex1 == vertex2 {
            return Err(TextRankError::invalid_input(format!(
                "self-loop on vertex {vertex1} is not allowed"
            )));
        }

        let i = self.get_or_insert(vertex1);
        let j = self.get_or_insert(vertex2);
        if !self.matrix[i][j] {
            self.matrix[i][j] = true;
            self.matrix[j][i] = true;
            self.edge_count += 1;
        }
        Ok(())
    }

    fn is_incidental(&self, vertex1: TokenId, vertex2: TokenId) -> Incidence {
        match (self.index_of(vertex1), self.index_of(vertex2)) {
            (Some(i), Some(j)) if self.matrix[i][j] => Incidence::Adjacent,
            (Some(_), Some(_)) => Incidence::NotAdjacent,
            _ => Incidence::Unknown,
        }
    }

    fn calculate_inout_score(&self, vertex: TokenId) -> Result<usize> {
        Ok(self.row(vertex)?.iter().filter(|&&cell| cell).count())
    }

    fn neighbors(&self, vertex: TokenId) -> Result<Vec<TokenId>> {
        Ok(self
            .row(vertex)?
            .iter()
            .zip(&self.vertices)
            .filter(|(&cell, _)| cell)
            .map(|(_, &v)| v)
            .collect())
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn position_index(&self) -> &PositionIndex {
        &self.positions
    }

    fn position_index_mut(&mut self) -> &mut PositionIndex {
        &mut self.positions
    }
}
