//! Processing time estimation for long-text jobs

use crate::config::ChunkerConfig;

/// Fixed setup cost in seconds
const SETUP_SECONDS: u64 = 5;

/// Per-chunk synthesis overhead in seconds
const PER_CHUNK_SECONDS: u64 = 2;

/// Cost of stitching the final audio in seconds
const CONCATENATION_SECONDS: u64 = 10;

/// Estimate how long a long-text job will take, in whole seconds
///
/// `floor(text_length / avg_chars_per_second)` plus 5 s setup, 2 s per chunk
/// and 10 s for concatenation. The chunk count is
/// `ceil(text_length / chunk_size)` and never less than one. A missing or
/// zero `chunk_size` uses the configured long-text chunk size; a
/// non-positive rate uses the configured rate.
pub fn estimate_processing_time(
    text_length: usize,
    avg_chars_per_second: f64,
    chunk_size: Option<usize>,
    config: &ChunkerConfig,
) -> u64 {
    let rate = if avg_chars_per_second.is_finite() && avg_chars_per_second > 0.0 {
        avg_chars_per_second
    } else {
        config.avg_chars_per_second
    };

    let chunk_size = chunk_size
        .filter(|&size| size > 0)
        .unwrap_or(config.long_text_chunk_size)
        .max(1);

    let num_chunks = text_length.div_ceil(chunk_size).max(1) as u64;
    let base = (text_length as f64 / rate).floor() as u64;

    base + SETUP_SECONDS + PER_CHUNK_SECONDS * num_chunks + CONCATENATION_SECONDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_estimate() {
        let config = ChunkerConfig::default();
        assert_eq!(estimate_processing_time(1000, 25.0, Some(200), &config), 65);
    }

    #[test]
    fn test_truncates_fractional_seconds() {
        let config = ChunkerConfig::default();
        // 1010 / 25 = 40.4 -> 40; ceil(1010 / 200) = 6 chunks.
        assert_eq!(estimate_processing_time(1010, 25.0, Some(200), &config), 67);
    }

    #[test]
    fn test_empty_text_counts_one_chunk() {
        let config = ChunkerConfig::default();
        assert_eq!(estimate_processing_time(0, 25.0, Some(200), &config), 17);
    }

    #[test]
    fn test_missing_chunk_size_uses_config() {
        let config = ChunkerConfig::builder()
            .long_text_chunk_size(500)
            .build()
            .unwrap();
        // 2 chunks of 500: 40 + 5 + 4 + 10.
        assert_eq!(estimate_processing_time(1000, 25.0, None, &config), 59);
        assert_eq!(estimate_processing_time(1000, 25.0, Some(0), &config), 59);
    }

    #[test]
    fn test_non_positive_rate_uses_config() {
        let config = ChunkerConfig::default();
        assert_eq!(
            estimate_processing_time(1000, 0.0, Some(200), &config),
            estimate_processing_time(1000, 25.0, Some(200), &config)
        );
    }
}
