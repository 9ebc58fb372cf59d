//! Text preprocessing and token encoding
//!
//! These stages sit in front of the graph: raw text becomes lowercase content
//! words, and words become integer [`TokenId`](crate::types::TokenId)s.

pub mod encoder;
pub mod preprocess;
pub mod stopwords;
