//! Core types for textrank_keywords
//!
//! This module defines the fundamental data structures used throughout the library,
//! including token ids, co-occurrence pairs, score maps, and configuration.

use crate::errors::{Result, TextRankError};
use crate::graph::GraphStrategy;
use crate::nlp::stopwords::{default_punctuation, ENGLISH_STOPWORDS};
use crate::variants::Variant;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// Tokens & Pairs
// ============================================================================

/// An encoded word. Ids are issued by [`TextEncoder`](crate::nlp::encoder::TextEncoder)
/// and are opaque to the graph and ranking code.
pub type TokenId = u32;

/// Vertex -> importance score
pub type ScoreMap = FxHashMap<TokenId, f64>;

/// Vertex -> normalized position weight
pub type PositionWeights = FxHashMap<TokenId, f64>;

/// An unordered pair of distinct co-occurring tokens.
///
/// The two ids are stored sorted, so `(a, b)` and `(b, a)` compare equal and
/// hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair {
    first: TokenId,
    second: TokenId,
}

impl Pair {
    /// Create a canonical pair, or `None` for a self-pair
    pub fn new(a: TokenId, b: TokenId) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { first: a, second: b }),
            std::cmp::Ordering::Greater => Some(Self { first: b, second: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// The smaller token id
    pub fn first(&self) -> TokenId {
        self.first
    }

    /// The larger token id
    pub fn second(&self) -> TokenId {
        self.second
    }

    /// Check whether `token` is one of the two ends
    pub fn contains(&self, token: TokenId) -> bool {
        self.first == token || self.second == token
    }
}

impl From<Pair> for (TokenId, TokenId) {
    fn from(pair: Pair) -> Self {
        (pair.first, pair.second)
    }
}

/// Result of an adjacency query between two vertices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Incidence {
    /// Both vertices exist and share an edge
    Adjacent,
    /// Both vertices exist but are not connected
    NotAdjacent,
    /// At least one of the vertices is not in the graph
    Unknown,
}

impl Incidence {
    pub fn is_adjacent(self) -> bool {
        matches!(self, Incidence::Adjacent)
    }
}

// ============================================================================
// Keyword
// ============================================================================

/// A ranked keyword decoded back to its word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// The word as produced by the preprocessor
    pub word: String,
    /// The token id the word was encoded to
    pub token: TokenId,
    /// The final TextRank score
    pub score: f64,
    /// The rank (1-indexed, based on score)
    pub rank: usize,
}

impl Keyword {
    /// Create a new keyword
    pub fn new(word: impl Into<String>, token: TokenId, score: f64, rank: usize) -> Self {
        Self {
            word: word.into(),
            token,
            score,
            rank,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for keyword extraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Damping factor (probability of following an edge), in (0, 1)
    pub damping: f64,
    /// Maximum number of ranking iterations
    pub max_iterations: usize,
    /// Total absolute score change accepted as converged
    pub convergence_threshold: f64,
    /// Co-occurrence window length (>= 2)
    pub window_length: usize,
    /// Number of keywords to return
    pub top_n: usize,
    /// Graph storage strategy
    pub strategy: GraphStrategy,
    /// Ranking variant
    pub variant: Variant,
    /// Whether the built-in English stop word list is applied
    pub use_builtin_stopwords: bool,
    /// Additional stop words (extends the built-in list when enabled)
    pub stopwords: Vec<String>,
    /// Symbols stripped from the text before tokenization
    pub punctuation: Vec<String>,
    /// Minimum token length in characters
    pub min_token_length: usize,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-4,
            window_length: 3,
            top_n: 10,
            strategy: GraphStrategy::EdgeList,
            variant: Variant::Vanilla,
            use_builtin_stopwords: true,
            stopwords: Vec::new(),
            punctuation: default_punctuation(),
            min_token_length: 1,
        }
    }
}

impl TextRankConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }

        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }

        if !(self.convergence_threshold > 0.0 && self.convergence_threshold.is_finite()) {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be a positive finite number",
            ));
        }

        if self.window_length < 2 {
            return Err(TextRankError::invalid_config("window_length must be >= 2"));
        }

        if self.top_n == 0 {
            return Err(TextRankError::invalid_config("top_n must be > 0"));
        }

        if self.min_token_length == 0 {
            return Err(TextRankError::invalid_config("min_token_length must be > 0"));
        }

        Ok(())
    }

    /// The full stop word list: built-in words (if enabled) plus extras
    pub fn effective_stopwords(&self) -> Vec<String> {
        let mut words: Vec<String> = if self.use_builtin_stopwords {
            ENGLISH_STOPWORDS.iter().map(|w| w.to_string()).collect()
        } else {
            Vec::new()
        };
        words.extend(self.stopwords.iter().map(|w| w.to_lowercase()));
        words
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_convergence_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set window length
    pub fn with_window_length(mut self, window_length: usize) -> Self {
        self.window_length = window_length;
        self
    }

    /// Builder method: set top N keywords to return
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Builder method: set graph storage strategy
    pub fn with_strategy(mut self, strategy: GraphStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder method: set ranking variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Builder method: enable or disable the built-in stop word list
    pub fn with_builtin_stopwords(mut self, enabled: bool) -> Self {
        self.use_builtin_stopwords = enabled;
        self
    }

    /// Builder method: add stop words
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Builder method: replace the punctuation symbols
    pub fn with_punctuation<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.punctuation = symbols.into_iter().map(Into::into).collect();
        self
    }

    /// Builder method: set minimum token length
    pub fn with_min_token_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }
}
