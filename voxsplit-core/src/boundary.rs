//! Boundary selection for oversized text
//!
//! [`find_best_split`] cuts a piece of text that exceeds a length limit at
//! the most natural place it can find. Boundary types are tried in a fixed
//! priority order:
//!
//! 1. paragraph breaks (blank lines)
//! 2. sentence endings (`. `, `!"`, `?\n`, ...)
//! 3. clause delimiters (`, `, `; `, ` and `, ...)
//! 4. the last whitespace before the limit, or a hard cut at the limit
//!
//! Each tier scans the whole admissible region and keeps the rightmost
//! boundary that still fits, so chunks are filled as far as possible. The
//! first three tiers also reject boundaries that would leave a head shorter
//! than a fixed fraction of the limit.

use crate::text::{byte_offset, char_len, prefix};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Sentence-ending punctuation followed by a separator or a closing quote
const SENTENCE_ENDINGS: &[&str] = &[
    ". ", "! ", "? ", ".\n", "!\n", "?\n", ".\"", "!\"", "?\"", ".'", "!'", "?'",
];

/// Clause delimiters, including spaced conjunctions
const CLAUSE_DELIMITERS: &[&str] = &[
    ", ", "; ", ": ", " - ", " — ", " and ", " or ", " but ", " while ", " when ",
];

pub(crate) fn paragraph_break() -> &'static Regex {
    static PARAGRAPH_BREAK: OnceLock<Regex> = OnceLock::new();
    PARAGRAPH_BREAK.get_or_init(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"))
}

/// One level of the boundary cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundaryTier {
    /// Blank line between paragraphs
    Paragraph,
    /// End of a sentence
    Sentence,
    /// Clause delimiter or spaced conjunction
    Clause,
    /// Whitespace between words
    Word,
    /// Cut exactly at the limit; may split a word
    HardCut,
}

impl BoundaryTier {
    /// Fraction of the limit the head must exceed for this tier to apply
    pub fn min_head_ratio(&self) -> f64 {
        match self {
            BoundaryTier::Paragraph => 0.5,
            BoundaryTier::Sentence => 0.4,
            BoundaryTier::Clause => 0.3,
            BoundaryTier::Word | BoundaryTier::HardCut => 0.0,
        }
    }
}

impl fmt::Display for BoundaryTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryTier::Paragraph => "paragraph",
            BoundaryTier::Sentence => "sentence",
            BoundaryTier::Clause => "clause",
            BoundaryTier::Word => "word",
            BoundaryTier::HardCut => "hard-cut",
        };
        f.write_str(name)
    }
}

/// Result of splitting a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    /// Trimmed prefix ending at the chosen boundary
    pub head: &'a str,
    /// Trimmed remainder, including any overlap carried back from `head`
    pub tail: &'a str,
    /// Tier that produced the split; `None` when the text already fit
    pub tier: Option<BoundaryTier>,
}

/// A boundary locator returns the rightmost admissible split, as a byte
/// offset no greater than `byte_limit`
type Locator = fn(&str, usize) -> Option<usize>;

const CASCADE: [(BoundaryTier, Locator); 3] = [
    (BoundaryTier::Paragraph, locate_paragraph),
    (BoundaryTier::Sentence, locate_sentence),
    (BoundaryTier::Clause, locate_clause),
];

/// Split `text` at the best boundary not exceeding `max_length` characters
///
/// `overlap_chars` characters before the split point are repeated at the
/// start of the tail. Text that already fits is returned whole as the head.
/// When `text` is not blank the head is never empty, so repeated splitting
/// with zero overlap always makes progress.
pub fn find_best_split(text: &str, max_length: usize, overlap_chars: usize) -> Split<'_> {
    let text = text.trim();
    let max_length = max_length.max(1);

    if char_len(text) <= max_length {
        return Split {
            head: text,
            tail: "",
            tier: None,
        };
    }

    let byte_limit = byte_offset(text, max_length);
    let threshold = |tier: BoundaryTier| tier.min_head_ratio() * max_length as f64;

    for (tier, locate) in CASCADE {
        let Some(position) = locate(text, byte_limit) else {
            continue;
        };
        if char_len(&text[..position]) as f64 > threshold(tier) {
            return split_at(text, position, overlap_chars, tier);
        }
    }

    match locate_word(text, byte_limit) {
        Some(position) => split_at(text, position, overlap_chars, BoundaryTier::Word),
        None => {
            let position = prefix(text, max_length).len();
            split_at(text, position, overlap_chars, BoundaryTier::HardCut)
        }
    }
}

fn split_at(text: &str, position: usize, overlap_chars: usize, tier: BoundaryTier) -> Split<'_> {
    let tail_start = if overlap_chars == 0 {
        position
    } else {
        let split_chars = char_len(&text[..position]);
        byte_offset(text, split_chars.saturating_sub(overlap_chars))
    };

    let split = Split {
        head: text[..position].trim(),
        tail: text[tail_start..].trim(),
        tier: Some(tier),
    };
    log::debug!(
        "split at {tier} boundary: head {} chars, tail {} chars",
        char_len(split.head),
        char_len(split.tail)
    );
    split
}

fn locate_paragraph(text: &str, byte_limit: usize) -> Option<usize> {
    paragraph_break()
        .find_iter(text)
        .map(|m| m.end())
        .take_while(|&end| end <= byte_limit)
        .last()
}

fn locate_sentence(text: &str, byte_limit: usize) -> Option<usize> {
    rightmost_pattern_end(text, byte_limit, SENTENCE_ENDINGS)
}

fn locate_clause(text: &str, byte_limit: usize) -> Option<usize> {
    rightmost_pattern_end(text, byte_limit, CLAUSE_DELIMITERS)
}

/// Last whitespace before the limit, excluding position zero
fn locate_word(text: &str, byte_limit: usize) -> Option<usize> {
    text[..byte_limit]
        .char_indices()
        .rev()
        .find(|&(offset, ch)| offset > 0 && ch.is_whitespace())
        .map(|(offset, _)| offset)
}

/// Rightmost end of any pattern occurrence that fits within `byte_limit`
///
/// All patterns are checked at every position in a single pass, so
/// overlapping occurrences of different patterns are all considered.
fn rightmost_pattern_end(text: &str, byte_limit: usize, patterns: &[&str]) -> Option<usize> {
    let mut best = None;
    for (offset, _) in text.char_indices() {
        if offset >= byte_limit {
            break;
        }
        let rest = &text[offset..];
        for pattern in patterns {
            let end = offset + pattern.len();
            if end <= byte_limit && rest.starts_with(pattern) {
                best = best.max(Some(end));
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_within_limit_is_untouched() {
        let split = find_best_split("  Short text.  ", 50, 0);
        assert_eq!(split.head, "Short text.");
        assert_eq!(split.tail, "");
        assert_eq!(split.tier, None);
    }

    #[test]
    fn test_paragraph_tier_preferred() {
        let text = "First paragraph has some words in it.\n\nSecond paragraph follows here. It is long.";
        let split = find_best_split(text, 60, 0);
        assert_eq!(split.tier, Some(BoundaryTier::Paragraph));
        assert_eq!(split.head, "First paragraph has some words in it.");
        assert_eq!(split.tail, "Second paragraph follows here. It is long.");
    }

    #[test]
    fn test_small_paragraph_rejected_for_sentence() {
        // Paragraph break at 7 chars is below half of 40.
        let text = "Title.\n\nThe body starts here. It continues for quite a while longer.";
        let split = find_best_split(text, 40, 0);
        assert_eq!(split.tier, Some(BoundaryTier::Sentence));
        assert_eq!(split.head, "Title.\n\nThe body starts here.");
    }

    #[test]
    fn test_rightmost_sentence_wins() {
        let text = "One. Two. Three. Four is a much longer sentence that overflows.";
        let split = find_best_split(text, 20, 0);
        assert_eq!(split.tier, Some(BoundaryTier::Sentence));
        assert_eq!(split.head, "One. Two. Three.");
    }

    #[test]
    fn test_quoted_sentence_ending() {
        let text = "He said \"stop now!\" and then everyone left the room quietly.";
        let split = find_best_split(text, 30, 0);
        assert_eq!(split.tier, Some(BoundaryTier::Sentence));
        assert_eq!(split.head, "He said \"stop now!\"");
    }

    #[test]
    fn test_clause_tier() {
        let text = "This sentence has a comma, and it keeps going without any full stop at all";
        let split = find_best_split(text, 40, 0);
        assert_eq!(split.tier, Some(BoundaryTier::Clause));
        assert_eq!(split.head, "This sentence has a comma, and");
        assert_eq!(split.tail, "it keeps going without any full stop at all");
    }

    #[test]
    fn test_word_tier_fallback() {
        let text = "alpha beta gamma delta epsilon zeta eta theta";
        let split = find_best_split(text, 20, 0);
        assert_eq!(split.tier, Some(BoundaryTier::Word));
        assert_eq!(split.head, "alpha beta gamma");
        assert_eq!(split.tail, "delta epsilon zeta eta theta");
    }

    #[test]
    fn test_hard_cut_inside_word() {
        let text = "abcdefghijklmnopqrstuvwxyz";
        let split = find_best_split(text, 10, 0);
        assert_eq!(split.tier, Some(BoundaryTier::HardCut));
        assert_eq!(split.head, "abcdefghij");
        assert_eq!(split.tail, "klmnopqrstuvwxyz");
    }

    #[test]
    fn test_hard_cut_respects_multibyte_characters() {
        let text = "日本語のテキストは空白がありません";
        let split = find_best_split(text, 5, 0);
        assert_eq!(split.head, "日本語のテ");
        assert_eq!(char_len(split.head), 5);
    }

    #[test]
    fn test_overlap_repeats_context() {
        let text = "alpha beta gamma delta epsilon zeta";
        let split = find_best_split(text, 20, 5);
        assert_eq!(split.head, "alpha beta gamma");
        assert_eq!(split.tail, "gamma delta epsilon zeta");
    }

    #[test]
    fn test_overlapping_delimiters_all_considered() {
        // " and " and " or " share the space between them.
        let text = "xxxxxxxxxxxx and or yyyyyyyyyyyyyyyyyyyyyyyy";
        let end = rightmost_pattern_end(text, 20, CLAUSE_DELIMITERS);
        assert_eq!(end, Some(20));
    }

    #[test]
    fn test_head_never_exceeds_limit() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor.";
        for limit in 1..text.len() {
            let split = find_best_split(text, limit, 0);
            assert!(!split.head.is_empty());
            assert!(char_len(split.head) <= limit, "limit {limit}");
        }
    }
}
