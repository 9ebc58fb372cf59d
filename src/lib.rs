//! # textrank_keywords
//!
//! TextRank keyword extraction over word co-occurrence graphs.
//!
//! The pipeline runs text through a preprocessor and a stable word encoder,
//! builds an undirected co-occurrence graph from a sliding window, ranks the
//! vertices by power iteration and decodes the best tokens back to words.
//!
//! ## Features
//!
//! - **Two graph strategies**: dense adjacency matrix or sparse edge list,
//!   interchangeable behind [`CooccurrenceGraph`]
//! - **Two variants**: vanilla TextRank and a position-biased ranking that
//!   favors words appearing early and often
//! - **Deterministic**: ties break on token id, so both strategies and the
//!   parallel and sequential paths produce identical rankings
//!
//! ```no_run
//! use textrank_keywords::{extract_keywords, TextRankConfig, Variant};
//!
//! let config = TextRankConfig::default()
//!     .with_variant(Variant::PositionBiased)
//!     .with_top_n(5);
//! let keywords = extract_keywords("Compatibility of systems of linear constraints", &config)?;
//! for keyword in keywords {
//!     println!("{} {:.4}", keyword.word, keyword.score);
//! }
//! # Ok::<(), textrank_keywords::TextRankError>(())
//! ```

pub mod errors;
pub mod extraction;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod selector;
pub mod types;
pub mod variants;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{Incidence, Keyword, Pair, PositionWeights, ScoreMap, TextRankConfig, TokenId};

// Re-export main functionality
pub use extraction::{extract_keywords, ExtractionResult, KeywordExtractor};
pub use graph::{
    extract_pairs, positions::PositionIndex, AdjacencyMatrixGraph, CooccurrenceGraph,
    EdgeListGraph, GraphStrategy,
};
pub use nlp::{encoder::TextEncoder, preprocess::TextPreprocessor};
pub use pagerank::{
    KeywordRanker, PowerIteration, RankingOutcome, RankingParams, ScoringRule, TextRank,
};
pub use selector::select_top;
pub use variants::{
    position_biased::{PositionBiasedTextRank, PositionPrior},
    vanilla::{UniformTeleport, VanillaTextRank},
    Variant,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
