//! Hierarchical cascade chunking

use crate::boundary::find_best_split;

/// Repeatedly cut the remaining text at its best boundary
///
/// Text that already fits is emitted whole. Otherwise the head chosen by
/// [`find_best_split`] is emitted and splitting continues on the tail. Each
/// step strictly shortens the remaining text, so the loop terminates.
pub fn split_hierarchical(text: &str, max_length: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut remaining = text.trim();

    while !remaining.is_empty() {
        let split = find_best_split(remaining, max_length, 0);
        chunks.push(split.head.to_string());
        remaining = split.tail;
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitting_text_is_single_chunk() {
        assert_eq!(split_hierarchical("  Hello world.  ", 100), vec!["Hello world."]);
    }

    #[test]
    fn test_blank_text_yields_nothing() {
        assert!(split_hierarchical("   \n\n ", 10).is_empty());
    }

    #[test]
    fn test_sentences_fill_chunks() {
        let text = "The cat sat on the mat. The dog lay by the door. The bird sang in the tree.";
        let chunks = split_hierarchical(text, 50);
        assert_eq!(
            chunks,
            vec![
                "The cat sat on the mat. The dog lay by the door.",
                "The bird sang in the tree.",
            ]
        );
    }

    #[test]
    fn test_unbroken_text_is_hard_cut() {
        let chunks = split_hierarchical(&"x".repeat(25), 10);
        assert_eq!(chunks, vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]);
    }
}
