//! Iterative vertex scoring
//!
//! A single power-iteration driver ([`power::PowerIteration`]) runs the
//! snapshot / update / compare loop. Ranking variants differ only in the
//! [`ScoringRule`] they plug into it: how a vertex is initialized and how the
//! neighbor mass flowing into it becomes its next score.

pub mod engine;
pub mod power;

use crate::errors::{Result, TextRankError};
use crate::types::{TextRankConfig, TokenId};

pub use engine::{KeywordRanker, TextRank};
pub use power::PowerIteration;

/// Per-vertex initialization and update used by the power-iteration driver
pub trait ScoringRule: Sync {
    /// Score of `vertex` before the first iteration
    fn initial_score(&self, vertex: TokenId) -> f64;

    /// Next score of `vertex`, given `neighbor_mass` =
    /// `Σ snapshot(u) / degree(u)` over its neighbors `u`
    fn update_vertex_score(&self, vertex: TokenId, neighbor_mass: f64, damping: f64) -> f64;
}

/// Numeric parameters of a ranking run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingParams {
    /// Damping factor, in (0, 1)
    pub damping: f64,
    /// Total absolute score change accepted as converged
    pub convergence_threshold: f64,
    /// Iteration cap
    pub max_iterations: usize,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            damping: 0.85,
            convergence_threshold: 1e-4,
            max_iterations: 100,
        }
    }
}

impl RankingParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the ranking-related fields of a config
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self {
            damping: config.damping,
            convergence_threshold: config.convergence_threshold,
            max_iterations: config.max_iterations,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(TextRankError::invalid_config(format!(
                "damping must be strictly between 0 and 1, got {}",
                self.damping
            )));
        }
        if !(self.convergence_threshold > 0.0 && self.convergence_threshold.is_finite()) {
            return Err(TextRankError::invalid_config(
                "convergence_threshold must be a positive finite number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(TextRankError::invalid_config("max_iterations must be > 0"));
        }
        Ok(())
    }

    /// Builder method: set damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Builder method: set convergence threshold
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.convergence_threshold = threshold;
        self
    }

    /// Builder method: set max iterations
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// How a ranking run ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingOutcome {
    /// Whether the total score change dropped to the threshold
    pub converged: bool,
    /// Iterations actually performed
    pub iterations: usize,
    /// Total absolute score change of the last iteration
    pub delta: f64,
}

impl RankingOutcome {
    /// Turn a capped run into `ConvergenceFailure`.
    ///
    /// The scores of a capped run are still kept by the ranker; this is for
    /// callers that want to treat non-convergence as an error.
    pub fn ensure_converged(&self) -> Result<()> {
        if self.converged {
            Ok(())
        } else {
            Err(TextRankError::convergence_failure(self.iterations, self.delta))
        }
    }
}
