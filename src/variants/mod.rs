//! TextRank variants
//!
//! This module provides the two scoring rules plugged into the shared
//! power-iteration driver:
//! - Vanilla: uniform teleportation, structure only
//! - PositionBiased: teleportation proportional to how early and how often a
//!   token occurs

pub mod position_biased;
pub mod vanilla;

use crate::errors::TextRankError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Vanilla,
    PositionBiased,
}

impl Variant {
    /// Whether the variant needs position weights on the graph
    pub fn needs_positions(self) -> bool {
        matches!(self, Variant::PositionBiased)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Vanilla => "vanilla",
            Variant::PositionBiased => "position_biased",
        }
    }
}

impl std::str::FromStr for Variant {
    type Err = TextRankError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_lowercase().as_str() {
            "vanilla" | "textrank" | "text_rank" | "base" => Ok(Variant::Vanilla),
            "position_biased" | "positionbiased" | "position" | "position_rank"
            | "positionrank" => Ok(Variant::PositionBiased),
            other => Err(TextRankError::invalid_config(format!(
                "unknown ranking variant '{other}'"
            ))),
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_parse() {
        assert_eq!("TextRank".parse::<Variant>().unwrap(), Variant::Vanilla);
        assert_eq!("position".parse::<Variant>().unwrap(), Variant::PositionBiased);
        assert!("topic_rank".parse::<Variant>().is_err());
    }

    #[test]
    fn test_variant_serde_names() {
        let json = serde_json::to_string(&Variant::PositionBiased).unwrap();
        assert_eq!(json, r#""position_biased""#);
        assert_eq!(Variant::PositionBiased.to_string(), "position_biased");
        assert!(Variant::PositionBiased.needs_positions());
        assert!(!Variant::Vanilla.needs_positions());
    }
}
