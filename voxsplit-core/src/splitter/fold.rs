//! Clause-delimiter fold for oversized sentences

use super::word::pack_words;
use crate::text::char_len;

/// Delimiters tried for oversized sentences on the basic path
pub const BASIC_DELIMITERS: &[&str] = &[", ", "; ", " - ", " — "];

/// Delimiters tried for oversized sentences when streaming
pub const STREAMING_DELIMITERS: &[&str] =
    &[", ", "; ", " - ", " — ", ": ", " and ", " or ", " but "];

/// Break an oversized piece of text by folding over `delimiters`
///
/// Each delimiter in turn re-splits only the pieces still longer than
/// `max_length`, re-packing the parts greedily with the delimiter between
/// them. Pieces that remain oversized after the last delimiter are
/// word-packed.
pub fn fold_delimiters(text: &str, max_length: usize, delimiters: &[&str]) -> Vec<String> {
    let pieces = delimiters
        .iter()
        .fold(vec![text.to_string()], |pieces, delimiter| {
            pieces
                .into_iter()
                .flat_map(|piece| {
                    if char_len(&piece) <= max_length {
                        vec![piece]
                    } else {
                        repack(&piece, delimiter, max_length)
                    }
                })
                .collect()
        });

    pieces
        .into_iter()
        .flat_map(|piece| {
            if char_len(&piece) <= max_length {
                vec![piece]
            } else {
                pack_words(&piece, max_length)
            }
        })
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}

/// Split on `delimiter` and greedily rejoin parts that fit together
fn repack(piece: &str, delimiter: &str, max_length: usize) -> Vec<String> {
    let delimiter_len = char_len(delimiter);
    let mut packed = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for part in piece.split(delimiter) {
        let part_len = char_len(part);
        let joiner_len = if current.is_empty() { 0 } else { delimiter_len };

        if current_len + joiner_len + part_len <= max_length {
            if joiner_len > 0 {
                current.push_str(delimiter);
            }
            current.push_str(part);
            current_len += joiner_len + part_len;
        } else {
            if !current.is_empty() {
                packed.push(std::mem::take(&mut current));
            }
            current.push_str(part);
            current_len = part_len;
        }
    }

    if !current.is_empty() {
        packed.push(current);
    }

    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fitting_text_passes_through() {
        let pieces = fold_delimiters("short, sweet", 50, STREAMING_DELIMITERS);
        assert_eq!(pieces, vec!["short, sweet"]);
    }

    #[test]
    fn test_commas_split_first() {
        let text = "red apples, green pears, yellow bananas, purple plums";
        let pieces = fold_delimiters(text, 25, STREAMING_DELIMITERS);
        assert_eq!(
            pieces,
            vec!["red apples, green pears", "yellow bananas", "purple plums"]
        );
    }

    #[test]
    fn test_later_delimiters_only_touch_oversized_pieces() {
        let text = "we waited, and the rain kept falling and falling and falling";
        let pieces = fold_delimiters(text, 30, STREAMING_DELIMITERS);
        assert_eq!(pieces[0], "we waited");
        assert!(pieces.iter().all(|p| char_len(p) <= 30));
    }

    #[test]
    fn test_word_fallback() {
        let text = "no delimiters appear anywhere inside this long clause";
        let pieces = fold_delimiters(text, 20, BASIC_DELIMITERS);
        assert_eq!(
            pieces,
            vec!["no delimiters appear", "anywhere inside this", "long clause"]
        );
    }
}
