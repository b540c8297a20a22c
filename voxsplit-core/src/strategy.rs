//! Chunking strategy selection

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Segmentation policy applied to a piece of text
///
/// For long-text chunking, `Sentence` selects the hierarchical
/// paragraph/sentence/clause/word cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    /// Sentence-aware splitting (hierarchical cascade for long text)
    #[default]
    Sentence,
    /// Blank-line paragraphs merged up to the limit
    Paragraph,
    /// Greedy word packing
    Word,
    /// Fixed-width character windows
    Fixed,
}

impl ChunkStrategy {
    /// All strategies in display order
    pub const ALL: [ChunkStrategy; 4] = [
        ChunkStrategy::Sentence,
        ChunkStrategy::Paragraph,
        ChunkStrategy::Word,
        ChunkStrategy::Fixed,
    ];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkStrategy::Sentence => "sentence",
            ChunkStrategy::Paragraph => "paragraph",
            ChunkStrategy::Word => "word",
            ChunkStrategy::Fixed => "fixed",
        }
    }

    /// Parse a strategy name, falling back to [`ChunkStrategy::Sentence`]
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse_lenient(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("unknown chunking strategy '{name}', using sentence");
            ChunkStrategy::Sentence
        })
    }
}

impl fmt::Display for ChunkStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a strategy name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chunking strategy: {0}")]
pub struct UnknownStrategy(pub String);

impl FromStr for ChunkStrategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sentence" => Ok(ChunkStrategy::Sentence),
            "paragraph" => Ok(ChunkStrategy::Paragraph),
            "word" => Ok(ChunkStrategy::Word),
            "fixed" => Ok(ChunkStrategy::Fixed),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("PARAGRAPH".parse(), Ok(ChunkStrategy::Paragraph));
        assert_eq!(" Fixed ".parse(), Ok(ChunkStrategy::Fixed));
    }

    #[test]
    fn test_unknown_name_falls_back() {
        assert!("semantic".parse::<ChunkStrategy>().is_err());
        assert_eq!(
            ChunkStrategy::parse_lenient("semantic"),
            ChunkStrategy::Sentence
        );
        assert_eq!(ChunkStrategy::parse_lenient(""), ChunkStrategy::Sentence);
    }

    #[test]
    fn test_display_matches_parse() {
        for strategy in ChunkStrategy::ALL {
            assert_eq!(strategy.to_string().parse(), Ok(strategy));
        }
    }
}
