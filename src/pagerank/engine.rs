//! Ranking engine: a graph, a scoring rule, and the scores they produce

use super::{PowerIteration, RankingOutcome, RankingParams, ScoringRule};
use crate::errors::Result;
use crate::graph::CooccurrenceGraph;
use crate::selector::select_top;
use crate::types::{ScoreMap, TokenId};

/// Operations every ranking variant exposes
///
/// Object safe, so variants can be chosen at run time as
/// `Box<dyn KeywordRanker>`.
pub trait KeywordRanker {
    /// Run the iteration from the initial scores
    fn score_vertices(&mut self) -> Result<RankingOutcome>;

    /// Scores of the last run, if any
    fn scores(&self) -> Option<&ScoreMap>;

    /// The `n` best vertices, highest score first
    fn top_keywords(&self, n: usize) -> Vec<TokenId>;
}

/// TextRank over any [`CooccurrenceGraph`], parameterized by its update rule.
///
/// The engine borrows the graph, so the graph cannot change while it is
/// being ranked. See [`VanillaTextRank`](crate::variants::vanilla::VanillaTextRank)
/// and [`PositionBiasedTextRank`](crate::variants::position_biased::PositionBiasedTextRank).
#[derive(Debug)]
pub struct TextRank<'g, G: ?Sized, R> {
    graph: &'g G,
    params: RankingParams,
    rule: R,
    parallel_threshold: Option<usize>,
    scores: Option<ScoreMap>,
    outcome: Option<RankingOutcome>,
}

impl<'g, G, R> TextRank<'g, G, R>
where
    G: CooccurrenceGraph + ?Sized,
    R: ScoringRule,
{
    /// Create an engine with an explicit scoring rule
    pub fn with_rule(graph: &'g G, params: RankingParams, rule: R) -> Self {
        Self {
            graph,
            params,
            rule,
            parallel_threshold: None,
            scores: None,
            outcome: None,
        }
    }

    /// Set the vertex count from which updates are computed in parallel
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = Some(threshold);
        self
    }

    /// Score all vertices, discarding any previous run.
    ///
    /// Hitting the iteration cap is not an error: the scores of the last
    /// iteration are kept and the outcome reports `converged == false`.
    pub fn score_vertices(&mut self) -> Result<RankingOutcome> {
        let mut driver = PowerIteration::new(self.params);
        if let Some(threshold) = self.parallel_threshold {
            driver = driver.with_parallel_threshold(threshold);
        }

        let (scores, outcome) = driver.run(self.graph, &self.rule)?;
        self.scores = Some(scores);
        self.outcome = Some(outcome);
        Ok(outcome)
    }

    /// Scores of the last run; `None` before `score_vertices`
    pub fn scores(&self) -> Option<&ScoreMap> {
        self.scores.as_ref()
    }

    /// Score of a single vertex from the last run
    pub fn score(&self, vertex: TokenId) -> Option<f64> {
        self.scores.as_ref()?.get(&vertex).copied()
    }

    /// Outcome of the last run
    pub fn outcome(&self) -> Option<RankingOutcome> {
        self.outcome
    }

    /// The `n` highest-scoring vertices; ties go to the smaller token id.
    ///
    /// Returns every vertex if `n` exceeds the vertex count, and nothing if
    /// the graph has not been scored yet.
    pub fn top_keywords(&self, n: usize) -> Vec<TokenId> {
        match &self.scores {
            Some(scores) => select_top(scores, self.graph.vertices(), n),
            None => Vec::new(),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn params(&self) -> &RankingParams {
        &self.params
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }
}

impl<'g, G, R> KeywordRanker for TextRank<'g, G, R>
where
    G: CooccurrenceGraph + ?Sized,
    R: ScoringRule,
{
    fn score_vertices(&mut self) -> Result<RankingOutcome> {
        TextRank::score_vertices(self)
    }

    fn scores(&self) -> Option<&ScoreMap> {
        TextRank::scores(self)
    }

    fn top_keywords(&self, n: usize) -> Vec<TokenId> {
        TextRank::top_keywords(self, n)
    }
}
