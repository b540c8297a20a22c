//! Sentence grouping
//!
//! Text is cut into sentences, then consecutive sentences are joined with a
//! single space while the result fits. Sentences that are too long on their
//! own go through the clause fold.

use super::fold::{fold_delimiters, BASIC_DELIMITERS, STREAMING_DELIMITERS};
use crate::text::char_len;
use regex::Regex;
use std::sync::OnceLock;

/// Terminal punctuation followed by any run of whitespace
fn streaming_sentence_end() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?]\s+").expect("sentence pattern is valid"))
}

/// Terminal punctuation followed by a space or a newline
fn basic_sentence_end() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[.!?][ \n]").expect("sentence pattern is valid"))
}

/// Cut `text` after the punctuation that starts every match
fn cut_after<'a>(text: &'a str, pattern: &Regex) -> Vec<&'a str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for found in pattern.find_iter(text) {
        sentences.push(&text[start..found.start() + 1]);
        start = found.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Group sentences into chunks of at most `max_length` characters
///
/// Sentences are joined with one space. An oversized sentence closes the
/// running chunk and is broken with [`fold_delimiters`] using `delimiters`.
pub fn group_sentences<'a, I>(sentences: I, max_length: usize, delimiters: &[&str]) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for sentence in sentences.into_iter().map(str::trim) {
        if sentence.is_empty() {
            continue;
        }
        let sentence_len = char_len(sentence);
        let separator = usize::from(!current.is_empty());

        if current_len + separator + sentence_len <= max_length {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(sentence);
            current_len += separator + sentence_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if sentence_len > max_length {
            log::trace!("breaking {sentence_len}-char sentence at clause delimiters");
            chunks.extend(fold_delimiters(sentence, max_length, delimiters));
        } else {
            current.push_str(sentence);
            current_len = sentence_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

/// Streaming sentence strategy
///
/// Sentences end at `.`, `!` or `?` followed by whitespace. Oversized
/// sentences are broken at commas, semicolons, dashes, colons and the
/// conjunctions "and", "or", "but".
pub fn split_sentences_streaming(text: &str, max_length: usize) -> Vec<String> {
    let text = text.trim();
    let sentences = cut_after(text, streaming_sentence_end());
    group_sentences(sentences, max_length, STREAMING_DELIMITERS)
}

/// Basic sentence strategy used for regular requests
///
/// Sentences end at `.`, `!` or `?` followed by a space or newline.
/// Oversized sentences are broken at commas, semicolons and dashes.
pub fn split_sentences_basic(text: &str, max_length: usize) -> Vec<String> {
    let sentences = cut_after(text, basic_sentence_end());
    group_sentences(sentences, max_length, BASIC_DELIMITERS)
}
