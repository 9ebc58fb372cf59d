//! Position-biased TextRank
//!
//! Biases ranking towards words that appear early and often. The uniform
//! `1 - d` teleportation of vanilla TextRank is replaced by a per-vertex prior
//! taken from the graph's position weights:
//!
//! ```text
//! score(v) = (1 - d) * w(v) + d * Σ_{u ∈ N(v)} score(u) / degree(u)
//! w(v)     = Σ_p 1 / (p + 1)  over the positions p of v, normalized to sum 1
//! ```
//!
//! The graph must have had `fill_positions` and `calculate_position_weights`
//! applied before a ranker is created.

use crate::errors::{Result, TextRankError};
use crate::graph::CooccurrenceGraph;
use crate::pagerank::{RankingParams, ScoringRule, TextRank};
use crate::types::{PositionWeights, TokenId};

/// Teleportation proportional to position weight
#[derive(Debug, Clone, Default)]
pub struct PositionPrior {
    weights: PositionWeights,
}

impl PositionPrior {
    pub fn new(weights: PositionWeights) -> Self {
        Self { weights }
    }

    /// Prior of `vertex` (0 for vertices without positions)
    pub fn weight(&self, vertex: TokenId) -> f64 {
        self.weights.get(&vertex).copied().unwrap_or(0.0)
    }

    pub fn weights(&self) -> &PositionWeights {
        &self.weights
    }
}

impl ScoringRule for PositionPrior {
    fn initial_score(&self, vertex: TokenId) -> f64 {
        self.weight(vertex)
    }

    fn update_vertex_score(&self, vertex: TokenId, neighbor_mass: f64, damping: f64) -> f64 {
        (1.0 - damping) * self.weight(vertex) + damping * neighbor_mass
    }
}

/// TextRank with a positional prior
pub type PositionBiasedTextRank<'g, G> = TextRank<'g, G, PositionPrior>;

impl<'g, G> TextRank<'g, G, PositionPrior>
where
    G: CooccurrenceGraph + ?Sized,
{
    /// Create a position-biased ranker over a filled graph.
    ///
    /// Fails with `InvalidInput` if the graph has vertices but no position
    /// weights.
    pub fn new(graph: &'g G, params: RankingParams) -> Result<Self> {
        if !graph.is_empty() && graph.position_weights().is_empty() {
            return Err(TextRankError::invalid_input(
                "position weights have not been computed; call fill_positions and \
                 calculate_position_weights first",
            ));
        }

        let prior = PositionPrior::new(graph.position_weights().clone());
        Ok(Self::with_rule(graph, params, prior))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeListGraph, GraphStrategy};
    use crate::pagerank::KeywordRanker;
    use crate::variants::vanilla::VanillaTextRank;

    fn prepared(strategy: GraphStrategy, tokens: &[TokenId], window: usize) -> Box<dyn CooccurrenceGraph> {
        let mut graph = strategy.build_from_tokens(tokens, window).unwrap();
        graph.fill_positions(tokens);
        graph.calculate_position_weights().unwrap();
        graph
    }

    #[test]
    fn test_requires_position_weights() {
        let mut graph = EdgeListGraph::new();
        graph.fill_from_tokens(&[1, 2, 3], 2).unwrap();

        let err = PositionBiasedTextRank::new(&graph, RankingParams::default()).unwrap_err();
        assert!(matches!(err, TextRankError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_graph_allowed() {
        let graph = EdgeListGraph::new();
        let mut ranker = PositionBiasedTextRank::new(&graph, RankingParams::default()).unwrap();
        let outcome = ranker.score_vertices().unwrap();
        assert!(outcome.converged);
        assert!(ranker.scores().unwrap().is_empty());
    }

    #[test]
    fn test_earlier_words_preferred() {
        // a path 1-2-3-4 is symmetric, so only position separates the ends
        let graph = prepared(GraphStrategy::EdgeList, &[1, 2, 3, 4], 2);
        let mut ranker = PositionBiasedTextRank::new(&*graph, RankingParams::default()).unwrap();
        let outcome = ranker.score_vertices().unwrap();
        assert!(outcome.converged);

        assert!(ranker.score(1).unwrap() > ranker.score(4).unwrap());
        assert!(ranker.score(2).unwrap() > ranker.score(3).unwrap());
        assert_eq!(ranker.top_keywords(1), vec![2]);
    }

    #[test]
    fn test_isolated_vertex_gets_its_prior() {
        let graph = prepared(GraphStrategy::AdjacencyMatrix, &[7], 2);
        let params = RankingParams::default();
        let mut ranker = PositionBiasedTextRank::new(&*graph, params).unwrap();
        ranker.score_vertices().unwrap();

        // single vertex has weight 1, so it settles at (1 - d)
        assert!((ranker.score(7).unwrap() - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_differs_from_vanilla() {
        let tokens = [1, 2, 3, 4];
        let graph = prepared(GraphStrategy::EdgeList, &tokens, 2);

        let mut vanilla = VanillaTextRank::new(&*graph, RankingParams::default());
        let mut biased = PositionBiasedTextRank::new(&*graph, RankingParams::default()).unwrap();
        vanilla.score_vertices().unwrap();
        biased.score_vertices().unwrap();

        let v = vanilla.scores().unwrap();
        assert!((v[&1] - v[&4]).abs() < 1e-9);
        let b = biased.scores().unwrap();
        assert!(b[&1] - b[&4] > 1e-6);
    }

    #[test]
    fn test_drop_in_replacement() {
        let graph = prepared(GraphStrategy::AdjacencyMatrix, &[5, 6, 7, 5, 8], 3);
        let rankers: Vec<Box<dyn KeywordRanker + '_>> = vec![
            Box::new(VanillaTextRank::new(&*graph, RankingParams::default())),
            Box::new(PositionBiasedTextRank::new(&*graph, RankingParams::default()).unwrap()),
        ];

        for mut ranker in rankers {
            ranker.score_vertices().unwrap();
            let top = ranker.top_keywords(10);
            assert_eq!(top.len(), 4);
            assert_eq!(top[0], 5);
        }
    }

    #[test]
    fn test_prior_accessors() {
        let weights: PositionWeights = [(1, 0.75), (2, 0.25)].into_iter().collect();
        let prior = PositionPrior::new(weights);
        assert_eq!(prior.weight(1), 0.75);
        assert_eq!(prior.weight(3), 0.0);
        assert_eq!(prior.initial_score(2), 0.25);
        assert!((prior.update_vertex_score(1, 2.0, 0.5) - (0.375 + 1.0)).abs() < 1e-12);
        assert_eq!(prior.weights().len(), 2);
    }
}
