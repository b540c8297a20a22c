//! Fixed-width chunking

use crate::text::char_windows;

/// Slice text into consecutive windows of `max_length` characters
///
/// No semantic awareness: windows may end mid-word. Each window is trimmed
/// and whitespace-only windows are dropped.
pub fn split_fixed(text: &str, max_length: usize) -> Vec<String> {
    char_windows(text, max_length.max(1))
        .map(str::trim)
        .filter(|window| !window.is_empty())
        .map(str::to_string)
        .collect()
}
