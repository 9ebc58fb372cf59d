//! Vanilla TextRank
//!
//! ```text
//! score(v) = (1 - d) + d * Σ_{u ∈ N(v)} score(u) / degree(u)
//! ```
//!
//! Every vertex starts at 1.0. An isolated vertex settles at `1 - d`.

use crate::graph::CooccurrenceGraph;
use crate::pagerank::{RankingParams, ScoringRule, TextRank};
use crate::types::TokenId;

/// Uniform teleportation: every vertex receives the same `1 - d`
#[derive(Debug, Clone, Copy, Default)]
pub struct UniformTeleport;

impl ScoringRule for UniformTeleport {
    fn initial_score(&self, _vertex: TokenId) -> f64 {
        1.0
    }

    fn update_vertex_score(&self, _vertex: TokenId, neighbor_mass: f64, damping: f64) -> f64 {
        (1.0 - damping) + damping * neighbor_mass
    }
}

/// Structure-only TextRank
pub type VanillaTextRank<'g, G> = TextRank<'g, G, UniformTeleport>;

impl<'g, G> TextRank<'g, G, UniformTeleport>
where
    G: CooccurrenceGraph + ?Sized,
{
    /// Create a vanilla ranker over a filled graph
    pub fn new(graph: &'g G, params: RankingParams) -> Self {
        Self::with_rule(graph, params, UniformTeleport)
    }
}
