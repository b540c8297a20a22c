//! End-to-end tests for the public chunking API

use std::io::Write;
use tempfile::NamedTempFile;
use voxsplit_core::text::char_len;
use voxsplit_core::{
    stitch_segments, AudioSegment, ChunkStrategy, Chunker, ChunkerConfig, Quality,
    StreamingRequest,
};

const ESSAY: &str = "The harbour was quiet in the early morning. Fishing boats rocked gently \
against the pier, and gulls circled overhead looking for scraps.\n\n\
By noon the market had opened. Traders called out prices for mackerel, crab and \
squid; buyers haggled loudly, and children ran between the stalls.\n\n\
When evening came the lights of the town flickered on one by one. The sea turned \
dark, the wind picked up, and the boats were pulled in for the night.";

fn permissive_chunker() -> Chunker {
    let config = ChunkerConfig::builder()
        .long_text_bounds(1, 10_000)
        .build()
        .unwrap();
    Chunker::with_config(config).unwrap()
}

#[test]
fn test_short_long_text_is_one_chunk_with_preview() {
    let text = "This sentence is exactly long enough to show how the preview gets cut short. \
                It keeps going for a while.";
    assert!(char_len(text) > 100);

    let records = Chunker::new().split_for_long_generation(text, None, None);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].index, 0);
    assert_eq!(records[0].text, text);
    assert_eq!(records[0].character_count, char_len(text));
    assert_eq!(
        records[0].preview,
        format!("{}...", text.chars().take(50).collect::<String>())
    );
}

#[test]
fn test_fixed_thousand_chars_into_ten_chunks() {
    let text = "abcdefghij".repeat(100);
    let chunks = Chunker::new().chunk_text(&text, ChunkStrategy::Fixed, Some(100));
    assert_eq!(chunks.len(), 10);
    assert!(chunks.iter().all(|c| char_len(c) == 100));
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_every_strategy_respects_limit() {
    let chunker = Chunker::new();
    for strategy in ChunkStrategy::ALL {
        for max_length in [40, 80, 150] {
            let chunks = chunker.chunk_text(ESSAY, strategy, Some(max_length));
            assert!(!chunks.is_empty(), "{strategy} produced no chunks");
            for chunk in &chunks {
                assert!(
                    char_len(chunk) <= max_length,
                    "{strategy} chunk of {} chars exceeds {max_length}: {chunk:?}",
                    char_len(chunk)
                );
                assert_eq!(chunk.trim(), chunk);
                assert!(!chunk.is_empty());
            }
        }
    }
}

#[test]
fn test_hierarchical_prefers_paragraphs() {
    let chunks = Chunker::new().chunk_text(ESSAY, ChunkStrategy::Sentence, Some(200));
    assert_eq!(chunks.len(), 3);
    assert!(chunks[0].starts_with("The harbour"));
    assert!(chunks[1].starts_with("By noon"));
    assert!(chunks[2].starts_with("When evening"));
}

#[test]
fn test_chunks_preserve_word_order() {
    let chunks = Chunker::new().chunk_text(ESSAY, ChunkStrategy::Word, Some(60));
    let rejoined: Vec<&str> = chunks.iter().flat_map(|c| c.split_whitespace()).collect();
    let original: Vec<&str> = ESSAY.split_whitespace().collect();
    assert_eq!(rejoined, original);
}

#[test]
fn test_multibyte_text_counts_characters() {
    let text = "日本語のテキストを分割します".repeat(5);
    let chunks = Chunker::new().chunk_text(&text, ChunkStrategy::Sentence, Some(7));
    assert!(chunks.iter().all(|c| char_len(c) <= 7));
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_streaming_defaults() {
    let (settings, chunks) =
        Chunker::new().split_for_streaming(ESSAY, &StreamingRequest::default());
    assert_eq!(settings.chunk_size, 200);
    assert_eq!(settings.strategy, ChunkStrategy::Sentence);
    assert_eq!(settings.quality, None);
    assert!(chunks.iter().all(|c| char_len(c) <= 200));
}

#[test]
fn test_streaming_request_from_names() {
    let request = StreamingRequest::from_names(Some(0), Some("semantic"), Some("fast"));
    let (settings, chunks) = Chunker::new().split_for_streaming(ESSAY, &request);
    assert_eq!(settings.chunk_size, 100);
    assert_eq!(settings.strategy, ChunkStrategy::Sentence);
    assert_eq!(settings.quality, Some(Quality::Fast));
    assert!(chunks.iter().all(|c| char_len(c) <= 100));
}

#[test]
fn test_regular_request_passthrough() {
    let text = "  Leading and trailing spaces stay.  ";
    assert_eq!(Chunker::new().split_into_chunks(text, None), vec![text]);
}

#[test]
fn test_repetitive_text_rejected() {
    let text = vec!["again"; 20].join(" ");
    let result = permissive_chunker().validate_long_text(&text);
    assert!(!result.is_valid);
    assert_eq!(result.message, "Text appears to be excessively repetitive");
}

#[test]
fn test_default_minimum_length_enforced() {
    let result = Chunker::new().validate_long_text(ESSAY);
    assert!(!result.is_valid);
    assert!(result.message.contains("at least 3000 characters"));
}

#[test]
fn test_estimate_reference_value() {
    assert_eq!(Chunker::new().estimate_processing_time(1000, Some(200)), 65);
}

#[test]
fn test_stitch_three_segments() {
    let segments: Vec<AudioSegment> = (0..3)
        .map(|i| AudioSegment::mono(16_000, vec![i as f32 * 0.1; 16_000]))
        .collect();
    let stitched = stitch_segments(segments, 16_000).unwrap();
    assert_eq!(stitched.frames(), 51_200);
    assert!((stitched.duration_secs() - 3.2).abs() < 1e-9);
}

#[test]
fn test_config_file_drives_chunker() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "long_text_chunk_size = 120\nlong_text_strategy = \"paragraph\"\navg_chars_per_second = 50.0"
    )
    .unwrap();

    let config = ChunkerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.default_chunk_length, 280);

    let chunker = Chunker::with_config(config).unwrap();
    let records = chunker.split_for_long_generation(ESSAY, None, None);
    assert!(records.len() >= 3);
    assert!(records.iter().all(|r| r.character_count <= 120));
    // 1000 / 50 + 5 + 2 * 9 + 10
    assert_eq!(chunker.estimate_processing_time(1000, None), 53);
}
