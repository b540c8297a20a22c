//! Greedy word packing

use crate::text::{char_len, char_windows};

/// Pack whitespace-delimited words into chunks of at most `max_length`
///
/// Words are joined with a single space. A word longer than `max_length` is
/// the only content ever cut mid-token: it is broken into `max_length`
/// character pieces.
pub fn pack_words(text: &str, max_length: usize) -> Vec<String> {
    let max_length = max_length.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = char_len(word);
        let separator = usize::from(!current.is_empty());

        if current_len + separator + word_len <= max_length {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_len += separator + word_len;
            continue;
        }

        if !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if word_len > max_length {
            log::trace!("force-splitting {word_len}-char word at {max_length} chars");
            chunks.extend(char_windows(word, max_length).map(str::to_string));
        } else {
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
