/*!
 * Tests for text segmentation
 */

use colingo::translation::segment;

/// Concatenating segments in order must reproduce the input exactly
#[test]
fn test_segment_withVariousInputs_shouldReconstructExactly() {
    let inputs = [
        "hello world",
        "a",
        "こんにちは、世界。改行も\n含む。",
        "exactly-ten",
        "mixed ascii と日本語 🎌 emoji",
    ];

    for input in inputs {
        for max_len in [1, 2, 3, 7, 100] {
            let segments = segment(input, max_len);
            let rebuilt: String = segments.iter().map(|s| s.text.as_str()).collect();
            assert_eq!(rebuilt, input, "input {:?} max_len {}", input, max_len);
            for seg in &segments {
                assert!(
                    seg.text.chars().count() <= max_len,
                    "segment {:?} exceeds {} code points",
                    seg.text,
                    max_len
                );
            }
        }
    }
}

#[test]
fn test_segment_withEmptyText_shouldYieldZeroSegments() {
    assert!(segment("", 4500).is_empty());
}

#[test]
fn test_segment_withTextShorterThanLimit_shouldYieldSingleSegment() {
    let segments = segment("short", 4500);
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "short");
    assert_eq!(segments[0].offset, 0);
}

#[test]
fn test_segment_withKnownLength_shouldProduceDeterministicBoundaries() {
    // 10 chars, max_len 4 -> [0,4), [4,8), [8,10)
    let segments = segment("0123456789", 4);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, "0123");
    assert_eq!(segments[0].offset, 0);
    assert_eq!(segments[1].text, "4567");
    assert_eq!(segments[1].offset, 4);
    assert_eq!(segments[2].text, "89");
    assert_eq!(segments[2].offset, 8);
}

#[test]
fn test_segment_withMultibyteCharacters_shouldCountCodePointsNotBytes() {
    // Each of these chars is 3 bytes in UTF-8; a byte-based slicer at
    // max_len 2 would split mid-character.
    let segments = segment("あいうえお", 2);
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[0].text, "あい");
    assert_eq!(segments[1].text, "うえ");
    assert_eq!(segments[2].text, "お");
    assert_eq!(segments[2].offset, 4);
}
