//! Top-N keyword selection

use crate::types::{ScoreMap, TokenId};
use std::cmp::Ordering;

/// Order two scored vertices: higher score first, then smaller token id.
///
/// This gives a total, deterministic order regardless of hash iteration
/// order or which graph strategy produced the scores.
pub fn stable_cmp(a: &(TokenId, f64), b: &(TokenId, f64)) -> Ordering {
    b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

/// All `vertices` with their scores, best first.
///
/// Vertices missing from `scores` rank with a score of 0.
pub fn rank_vertices(scores: &ScoreMap, vertices: &[TokenId]) -> Vec<(TokenId, f64)> {
    let mut ranked: Vec<(TokenId, f64)> = vertices
        .iter()
        .map(|&v| (v, scores.get(&v).copied().unwrap_or(0.0)))
        .collect();
    ranked.sort_by(stable_cmp);
    ranked
}

/// The `n` best vertices (all of them if `n` exceeds the count)
pub fn select_top(scores: &ScoreMap, vertices: &[TokenId], n: usize) -> Vec<TokenId> {
    rank_vertices(scores, vertices)
        .into_iter()
        .take(n)
        .map(|(v, _)| v)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(entries: &[(TokenId, f64)]) -> ScoreMap {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_orders_by_score() {
        let s = scores(&[(1, 0.2), (2, 0.9), (3, 0.5)]);
        assert_eq!(select_top(&s, &[1, 2, 3], 2), vec![2, 3]);
    }

    #[test]
    fn test_ties_break_on_token() {
        let s = scores(&[(40, 1.0), (10, 1.0), (30, 1.0), (20, 1.0)]);
        assert_eq!(select_top(&s, &[40, 30, 20, 10], 2), vec![10, 20]);
    }

    #[test]
    fn test_n_larger_than_vertex_count() {
        let s = scores(&[(1, 0.1), (2, 0.3)]);
        assert_eq!(select_top(&s, &[1, 2], 10), vec![2, 1]);
        assert!(select_top(&s, &[1, 2], 0).is_empty());
    }

    #[test]
    fn test_missing_scores_rank_last() {
        let s = scores(&[(1, 0.1)]);
        let ranked = rank_vertices(&s, &[2, 1]);
        assert_eq!(ranked, vec![(1, 0.1), (2, 0.0)]);
    }
}
