//! Token position bookkeeping for position-biased ranking
//!
//! Both graph strategies embed a [`PositionIndex`]; the storage of adjacency
//! is the only thing they do differently.

use crate::errors::{Result, TextRankError};
use crate::types::{PositionWeights, TokenId};
use rustc_hash::FxHashMap;

/// Occurrence positions and the normalized weights derived from them
#[derive(Debug, Clone, Default)]
pub struct PositionIndex {
    /// Token -> 0-based indices of its occurrences, ascending
    positions: FxHashMap<TokenId, Vec<usize>>,
    /// Token -> normalized weight (sums to 1 once computed)
    weights: PositionWeights,
}

impl PositionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the index of every token occurrence to its position list
    pub fn fill(&mut self, tokens: &[TokenId]) {
        for (index, &token) in tokens.iter().enumerate() {
            self.positions.entry(token).or_default().push(index);
        }
    }

    /// Positions recorded for `token`
    pub fn positions_of(&self, token: TokenId) -> Option<&[usize]> {
        self.positions.get(&token).map(Vec::as_slice)
    }

    /// Compute weights for `vertices`.
    ///
    /// Raw weight of a vertex is the sum of `1 / (position + 1)` over its
    /// occurrences; raw weights are then divided by their total. Vertices
    /// without recorded positions get weight 0.
    pub fn calculate_weights(&mut self, vertices: &[TokenId]) -> Result<()> {
        let raw: Vec<(TokenId, f64)> = vertices
            .iter()
            .map(|&vertex| {
                let weight = self
                    .positions
                    .get(&vertex)
                    .map(|list| list.iter().map(|&p| 1.0 / (p as f64 + 1.0)).sum::<f64>())
                    .unwrap_or(0.0);
                (vertex, weight)
            })
            .collect();

        let total: f64 = raw.iter().map(|(_, w)| w).sum();
        if total <= 0.0 {
            return Err(TextRankError::empty_input(
                "no positions recorded for any vertex; call fill_positions first",
            ));
        }

        self.weights = raw.into_iter().map(|(v, w)| (v, w / total)).collect();
        Ok(())
    }

    pub fn weights(&self) -> &PositionWeights {
        &self.weights
    }

    /// Whether position weights have been computed
    pub fn has_weights(&self) -> bool {
        !self.weights.is_empty()
    }
}
