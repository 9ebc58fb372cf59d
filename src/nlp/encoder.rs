//! Word <-> token id encoding
//!
//! Each distinct word receives one stable id for the lifetime of the encoder.
//! Ids start at [`ID_OFFSET`] and follow first-appearance order, so encoding
//! the same document twice yields the same ids.

use crate::errors::{Result, TextRankError};
use crate::types::TokenId;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// The first id handed out by an encoder
pub const ID_OFFSET: TokenId = 1000;

/// Interning encoder mapping words to [`TokenId`]s and back
#[derive(Debug, Default, Clone)]
pub struct TextEncoder {
    /// Maps words to their ids
    word_to_id: FxHashMap<Arc<str>, TokenId>,
    /// Maps `id - ID_OFFSET` back to words
    id_to_word: Vec<Arc<str>>,
}

impl TextEncoder {
    /// Create a new empty encoder
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an encoder with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            word_to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            id_to_word: Vec::with_capacity(capacity),
        }
    }

    /// Encode a word sequence, learning ids for unseen words.
    ///
    /// Returns `EmptyInput` for an empty sequence.
    pub fn encode<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<Vec<TokenId>> {
        if tokens.is_empty() {
            return Err(TextRankError::empty_input("cannot encode an empty token sequence"));
        }
        Ok(tokens.iter().map(|t| self.intern(t.as_ref())).collect())
    }

    /// Decode a token id sequence back to words.
    ///
    /// Fails with `DecodeMiss` on the first id this encoder never issued.
    pub fn decode(&self, ids: &[TokenId]) -> Result<Vec<String>> {
        ids.iter()
            .map(|&id| {
                self.word(id)
                    .map(str::to_string)
                    .ok_or_else(|| TextRankError::decode_miss(id))
            })
            .collect()
    }

    /// Look up the id of a known word
    pub fn word_id(&self, word: &str) -> Option<TokenId> {
        self.word_to_id.get(word).copied()
    }

    /// Look up the word for an id
    pub fn word(&self, id: TokenId) -> Option<&str> {
        let index = id.checked_sub(ID_OFFSET)? as usize;
        self.id_to_word.get(index).map(|w| w.as_ref())
    }

    /// Number of distinct words known
    pub fn len(&self) -> usize {
        self.id_to_word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_to_word.is_empty()
    }

    fn intern(&mut self, word: &str) -> TokenId {
        if let Some(&id) = self.word_to_id.get(word) {
            return id;
        }

        let id = ID_OFFSET + self.id_to_word.len() as TokenId;
        let arc: Arc<str> = word.into();
        self.word_to_id.insert(arc.clone(), id);
        self.id_to_word.push(arc);
        id
    }
}
