//! Power-iteration driver shared by all ranking variants
//!
//! ```text
//! score'(v) = rule(v, Σ_{u ∈ N(v)} score(u) / degree(u))
//! ```
//!
//! Each iteration reads only the previous snapshot and writes a private
//! next-iteration buffer, which is then swapped in. The loop stops once the
//! total absolute change is at most the convergence threshold, or at the
//! iteration cap.

use super::{RankingOutcome, RankingParams, ScoringRule};
use crate::errors::Result;
use crate::graph::CooccurrenceGraph;
use crate::types::{ScoreMap, TokenId};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// Vertex count from which per-vertex updates run on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 2048;

/// The iteration loop, parameterized by a [`ScoringRule`]
#[derive(Debug, Clone, Copy)]
pub struct PowerIteration {
    params: RankingParams,
    parallel_threshold: usize,
}

/// Graph structure flattened to indices for the duration of one run
struct IndexedGraph {
    vertices: Vec<TokenId>,
    /// neighbors[i] = indices of the neighbors of vertices[i]
    neighbors: Vec<Vec<usize>>,
    /// 1 / degree, or 0 for isolated vertices
    inv_degree: Vec<f64>,
}

impl IndexedGraph {
    fn from_graph<G: CooccurrenceGraph + ?Sized>(graph: &G) -> Result<Self> {
        let vertices = graph.vertices().to_vec();
        let index: FxHashMap<TokenId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        let mut neighbors = Vec::with_capacity(vertices.len());
        let mut inv_degree = Vec::with_capacity(vertices.len());
        for &vertex in &vertices {
            let mut adjacent: Vec<usize> = graph
                .neighbors(vertex)?
                .into_iter()
                .filter_map(|u| index.get(&u).copied())
                .collect();
            // summation order must not depend on the storage strategy
            adjacent.sort_unstable();
            neighbors.push(adjacent);

            let degree = graph.calculate_inout_score(vertex)?;
            inv_degree.push(if degree == 0 { 0.0 } else { 1.0 / degree as f64 });
        }

        Ok(Self {
            vertices,
            neighbors,
            inv_degree,
        })
    }

    fn neighbor_mass(&self, i: usize, snapshot: &[f64]) -> f64 {
        self.neighbors[i]
            .iter()
            .map(|&j| snapshot[j] * self.inv_degree[j])
            .sum()
    }
}

impl PowerIteration {
    pub fn new(params: RankingParams) -> Self {
        Self {
            params,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Set the vertex count from which updates are computed in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn params(&self) -> &RankingParams {
        &self.params
    }

    /// Score every vertex of `graph` under `rule`
    pub fn run<G, R>(&self, graph: &G, rule: &R) -> Result<(ScoreMap, RankingOutcome)>
    where
        G: CooccurrenceGraph + ?Sized,
        R: ScoringRule,
    {
        self.params.validate()?;

        let indexed = IndexedGraph::from_graph(graph)?;
        let n = indexed.vertices.len();
        let _span = tracing::debug_span!("power_iteration", vertices = n).entered();

        if n == 0 {
            return Ok((
                ScoreMap::default(),
                RankingOutcome {
                    converged: true,
                    iterations: 0,
                    delta: 0.0,
                },
            ));
        }

        let damping = self.params.damping;
        let parallel = n >= self.parallel_threshold;

        let mut scores: Vec<f64> = indexed
            .vertices
            .iter()
            .map(|&v| rule.initial_score(v))
            .collect();
        let mut next = vec![0.0; n];

        let mut iterations = 0;
        let mut delta = f64::INFINITY;
        let mut converged = false;

        while iterations < self.params.max_iterations {
            iterations += 1;

            let snapshot = scores.as_slice();
            let update = |(i, slot): (usize, &mut f64)| {
                let mass = indexed.neighbor_mass(i, snapshot);
                *slot = rule.update_vertex_score(indexed.vertices[i], mass, damping);
            };
            if parallel {
                next.par_iter_mut().enumerate().for_each(update);
            } else {
                next.iter_mut().enumerate().for_each(update);
            }

            delta = scores
                .iter()
                .zip(&next)
                .map(|(old, new)| (new - old).abs())
                .sum();
            std::mem::swap(&mut scores, &mut next);

            if delta <= self.params.convergence_threshold {
                converged = true;
                break;
            }
        }

        if converged {
            debug!(iterations, delta, "ranking converged");
        } else {
            warn!(
                iterations,
                delta,
                threshold = self.params.convergence_threshold,
                "ranking hit the iteration cap before converging"
            );
        }

        let score_map: ScoreMap = indexed.vertices.iter().copied().zip(scores).collect();
        Ok((
            score_map,
            RankingOutcome {
                converged,
                iterations,
                delta,
            },
        ))
    }
}
