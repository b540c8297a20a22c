//! Character-based measurement helpers
//!
//! Every length in this crate counts Unicode scalar values, never bytes.
//! These helpers translate between character counts and UTF-8 byte offsets
//! so slicing always lands on a character boundary.

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte offset of the character at index `chars`
///
/// Returns `text.len()` when `text` has `chars` characters or fewer.
pub fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(offset, _)| offset)
}

/// The first `chars` characters of `text`
pub fn prefix(text: &str, chars: usize) -> &str {
    &text[..byte_offset(text, chars)]
}

/// Split `text` into consecutive windows of `size` characters
///
/// The last window may be shorter. `size` must be positive.
pub fn char_windows(text: &str, size: usize) -> impl Iterator<Item = &str> + '_ {
    debug_assert!(size > 0, "window size must be positive");
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (window, tail) = rest.split_at(byte_offset(rest, size));
        rest = tail;
        Some(window)
    })
}
