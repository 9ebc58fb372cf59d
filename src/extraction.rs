//! End-to-end keyword extraction
//!
//! text -> preprocess -> encode -> co-occurrence graph -> rank -> top N -> decode

use crate::errors::Result;
use crate::graph::CooccurrenceGraph;
use crate::nlp::encoder::TextEncoder;
use crate::nlp::preprocess::TextPreprocessor;
use crate::pagerank::{KeywordRanker, RankingParams};
use crate::types::{Keyword, TextRankConfig};
use crate::variants::position_biased::PositionBiasedTextRank;
use crate::variants::vanilla::VanillaTextRank;
use crate::variants::Variant;
use tracing::debug;

/// Result of keyword extraction including convergence info
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionResult {
    /// Ranked keywords, best first
    pub keywords: Vec<Keyword>,
    /// Whether ranking converged before the iteration cap
    pub converged: bool,
    /// Ranking iterations performed
    pub iterations: usize,
}

impl ExtractionResult {
    fn empty() -> Self {
        Self {
            keywords: Vec::new(),
            converged: true,
            iterations: 0,
        }
    }
}

/// Keyword extractor driven by a [`TextRankConfig`]
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    config: TextRankConfig,
    preprocessor: TextPreprocessor,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordExtractor {
    /// Create a new extractor with default config
    pub fn new() -> Self {
        Self::with_config(TextRankConfig::default())
    }

    /// Create with custom config
    pub fn with_config(config: TextRankConfig) -> Self {
        let preprocessor = TextPreprocessor::from_config(&config);
        Self {
            config,
            preprocessor,
        }
    }

    pub fn config(&self) -> &TextRankConfig {
        &self.config
    }

    /// Extract keywords from raw text
    pub fn extract(&self, text: &str) -> Result<Vec<Keyword>> {
        Ok(self.extract_with_info(text)?.keywords)
    }

    /// Extract keywords with ranking convergence information.
    ///
    /// Text without any content words yields an empty result.
    pub fn extract_with_info(&self, text: &str) -> Result<ExtractionResult> {
        let words = self.preprocessor.preprocess_text(text);
        self.extract_from_words(&words)
    }

    /// Extract keywords from already preprocessed words
    pub fn extract_from_words<S: AsRef<str>>(&self, words: &[S]) -> Result<ExtractionResult> {
        self.config.validate()?;
        if words.is_empty() {
            return Ok(ExtractionResult::empty());
        }

        let mut encoder = TextEncoder::with_capacity(words.len());
        let tokens = encoder.encode(words)?;

        let mut graph = self.config.strategy.build();
        graph.fill_from_tokens(&tokens, self.config.window_length)?;
        if self.config.variant.needs_positions() {
            graph.fill_positions(&tokens);
            graph.calculate_position_weights()?;
        }
        debug!(
            words = words.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            strategy = %self.config.strategy,
            variant = %self.config.variant,
            "co-occurrence graph built"
        );

        let params = RankingParams::from_config(&self.config);
        let graph: &dyn CooccurrenceGraph = &*graph;
        let mut ranker: Box<dyn KeywordRanker + '_> = match self.config.variant {
            Variant::Vanilla => Box::new(VanillaTextRank::new(graph, params)),
            Variant::PositionBiased => Box::new(PositionBiasedTextRank::new(graph, params)?),
        };
        let outcome = ranker.score_vertices()?;

        let top = ranker.top_keywords(self.config.top_n);
        let decoded = encoder.decode(&top)?;
        let keywords = top
            .iter()
            .zip(decoded)
            .enumerate()
            .map(|(i, (&token, word))| {
                let score = ranker
                    .scores()
                    .and_then(|scores| scores.get(&token))
                    .copied()
                    .unwrap_or(0.0);
                Keyword::new(word, token, score, i + 1)
            })
            .collect();

        Ok(ExtractionResult {
            keywords,
            converged: outcome.converged,
            iterations: outcome.iterations,
        })
    }
}

/// Convenience function to extract keywords from text
pub fn extract_keywords(text: &str, config: &TextRankConfig) -> Result<Vec<Keyword>> {
    KeywordExtractor::with_config(config.clone()).extract(text)
}
