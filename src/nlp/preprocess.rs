//! Text cleaning and word tokenization
//!
//! Raw text is stripped of configured punctuation symbols, lowercased, split
//! on UAX #29 word boundaries, and filtered against a stop word list.

use crate::nlp::stopwords::{default_punctuation, ENGLISH_STOPWORDS};
use crate::types::TextRankConfig;
use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Turns raw text into an ordered sequence of lowercase content words
#[derive(Debug, Clone, Default)]
pub struct TextPreprocessor {
    stop_words: FxHashSet<String>,
    punctuation: Vec<String>,
    /// Minimum token length to keep (in chars)
    min_token_length: usize,
}

impl TextPreprocessor {
    /// Create a preprocessor with explicit stop words and punctuation symbols
    pub fn new<W, P>(stop_words: W, punctuation: P) -> Self
    where
        W: IntoIterator,
        W::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        Self {
            stop_words: stop_words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
            punctuation: punctuation
                .into_iter()
                .map(Into::into)
                .filter(|p: &String| !p.is_empty())
                .collect(),
            min_token_length: 1,
        }
    }

    /// Preprocessor with the built-in English stop words and default punctuation
    pub fn english() -> Self {
        Self::new(ENGLISH_STOPWORDS.iter(), default_punctuation())
    }

    /// Build the preprocessor described by a config
    pub fn from_config(config: &TextRankConfig) -> Self {
        Self::new(config.effective_stopwords(), config.punctuation.iter().cloned())
            .with_min_length(config.min_token_length)
    }

    /// Set minimum token length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_token_length = min_length;
        self
    }

    /// Check whether a (lowercase) word is a stop word
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Produce filtered, clean, lowercase tokens from raw text
    pub fn preprocess_text(&self, text: &str) -> Vec<String> {
        self.remove_stop_words(self.clean_and_tokenize(text))
    }

    /// Remove punctuation, lowercase and split into words
    fn clean_and_tokenize(&self, text: &str) -> Vec<String> {
        let mut cleaned = text.to_string();
        for symbol in &self.punctuation {
            if cleaned.contains(symbol.as_str()) {
                cleaned = cleaned.replace(symbol.as_str(), "");
            }
        }

        cleaned
            .to_lowercase()
            .unicode_words()
            .filter(|word| word.chars().count() >= self.min_token_length)
            .map(str::to_string)
            .collect()
    }

    fn remove_stop_words(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|word| !self.is_stopword(word))
            .collect()
    }
}
