//! Sliding-window co-occurrence pair extraction

use crate::errors::{Result, TextRankError};
use crate::types::{Pair, TokenId};
use rustc_hash::FxHashSet;

/// Collect every unordered pair of distinct tokens sharing a window.
///
/// At step `i` the window is `tokens[i..i + window_length]` (shorter at the
/// tail). The anchor `tokens[i]` is paired with every other token of that
/// window. Each canonical pair is emitted once, in first-discovery order.
///
/// Fails with `EmptyInput` for an empty sequence and `InvalidInput` for a
/// window shorter than 2.
pub fn extract_pairs(tokens: &[TokenId], window_length: usize) -> Result<Vec<Pair>> {
    if tokens.is_empty() {
        return Err(TextRankError::empty_input(
            "cannot extract pairs from an empty token sequence",
        ));
    }
    if window_length < 2 {
        return Err(TextRankError::invalid_input(format!(
            "window length must be >= 2, got {window_length}"
        )));
    }

    let mut seen: FxHashSet<Pair> = FxHashSet::default();
    let mut pairs = Vec::new();

    for (start, &anchor) in tokens.iter().enumerate() {
        let end = tokens.len().min(start.saturating_add(window_length));
        for &other in &tokens[start..end] {
            // Pair::new rejects the anchor itself and repeats of it
            if let Some(pair) = Pair::new(anchor, other) {
                if seen.insert(pair) {
                    pairs.push(pair);
                }
            }
        }
    }

    Ok(pairs)
}
