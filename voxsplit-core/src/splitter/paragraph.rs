//! Paragraph-first chunking

use super::hierarchical::split_hierarchical;
use super::paragraphs;
use super::sentence::split_sentences_streaming;
use crate::text::char_len;

const PARAGRAPH_JOINER: &str = "\n\n";

/// Merge consecutive paragraphs while the merged chunk fits
///
/// Paragraphs are rejoined with a blank line. Each closed chunk goes through
/// the hierarchical cascade, so a single paragraph longer than `max_length`
/// is broken at its sentence, clause or word boundaries. Text without any
/// non-blank paragraph falls back to the cascade directly.
pub fn split_paragraphs(text: &str, max_length: usize) -> Vec<String> {
    let mut blocks = paragraphs(text).peekable();
    if blocks.peek().is_none() {
        return split_hierarchical(text, max_length);
    }

    let mut chunks = Vec::new();
    let mut current: Option<String> = None;

    for paragraph in blocks {
        current = Some(match current.take() {
            None => paragraph.to_string(),
            Some(open) => {
                if char_len(&open) + PARAGRAPH_JOINER.len() + char_len(paragraph) <= max_length {
                    open + PARAGRAPH_JOINER + paragraph
                } else {
                    chunks.extend(split_hierarchical(&open, max_length));
                    paragraph.to_string()
                }
            }
        });
    }

    if let Some(open) = current {
        chunks.extend(split_hierarchical(&open, max_length));
    }

    chunks
}

/// Paragraph strategy used for streaming
///
/// Same merging rule as [`split_paragraphs`], but an oversized paragraph is
/// handed to the streaming sentence strategy instead of the cascade.
pub fn split_paragraphs_streaming(text: &str, max_length: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for paragraph in paragraphs(text.trim()) {
        let joiner_len = if current.is_empty() {
            0
        } else {
            PARAGRAPH_JOINER.len()
        };

        if char_len(&current) + joiner_len + char_len(paragraph) <= max_length {
            if joiner_len > 0 {
                current.push_str(PARAGRAPH_JOINER);
            }
            current.push_str(paragraph);
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
        }

        if char_len(paragraph) > max_length {
            chunks.extend(split_sentences_streaming(paragraph, max_length));
        } else {
            current.push_str(paragraph);
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "First paragraph.\n\nSecond paragraph.\n\n\nThird paragraph is here.";

    #[test]
    fn test_paragraphs_merged_when_they_fit() {
        let chunks = split_paragraphs(TEXT, 40);
        assert_eq!(
            chunks,
            vec!["First paragraph.\n\nSecond paragraph.", "Third paragraph is here."]
        );
    }

    #[test]
    fn test_everything_fits() {
        let chunks = split_paragraphs(TEXT, 200);
        assert_eq!(
            chunks,
            vec!["First paragraph.\n\nSecond paragraph.\n\nThird paragraph is here."]
        );
    }

    #[test]
    fn test_oversized_paragraph_uses_cascade() {
        let text = "Intro.\n\nThis paragraph is far too long. It has two sentences in it.";
        let chunks = split_paragraphs(text, 35);
        assert_eq!(
            chunks,
            vec![
                "Intro.",
                "This paragraph is far too long.",
                "It has two sentences in it.",
            ]
        );
    }

    #[test]
    fn test_streaming_variant_matches_for_short_paragraphs() {
        assert_eq!(
            split_paragraphs_streaming(TEXT, 40),
            split_paragraphs(TEXT, 40)
        );
    }

    #[test]
    fn test_streaming_variant_splits_long_paragraph_by_sentence() {
        let text = "Tiny.\n\nOne sentence here. Another sentence there. A third one.";
        let chunks = split_paragraphs_streaming(text, 30);
        assert_eq!(
            chunks,
            vec![
                "Tiny.",
                "One sentence here.",
                "Another sentence there.",
                "A third one.",
            ]
        );
    }
}
