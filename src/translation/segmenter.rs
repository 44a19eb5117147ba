/*!
 * Text segmentation for provider-safe requests.
 *
 * Translation providers reject or truncate oversized payloads, so a cell's
 * text is partitioned into bounded-length segments before translation.
 * Slicing is by Unicode code point, never by raw byte, so multi-byte
 * sequences are never corrupted. Concatenating the segments in order
 * reconstructs the input exactly.
 */

/// A contiguous slice of a larger text, produced for provider compatibility
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// The segment text
    pub text: String,

    /// Start offset of the segment within the source, in code points
    pub offset: usize,
}

/// Split text into ordered segments of at most `max_len` code points each.
///
/// Empty text yields zero segments; callers must treat that as "nothing to
/// translate", not an error. `max_len` must be positive (validated by the
/// pipeline before segmentation).
pub fn segment(text: &str, max_len: usize) -> Vec<Segment> {
    debug_assert!(max_len > 0, "segment length must be positive");
    if text.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut start_byte = 0;
    let mut start_char = 0;
    let mut chars_in_segment = 0;

    for (byte_idx, _) in text.char_indices() {
        if chars_in_segment == max_len {
            segments.push(Segment {
                text: text[start_byte..byte_idx].to_string(),
                offset: start_char,
            });
            start_byte = byte_idx;
            start_char += chars_in_segment;
            chars_in_segment = 0;
        }
        chars_in_segment += 1;
    }

    segments.push(Segment {
        text: text[start_byte..].to_string(),
        offset: start_char,
    });

    segments
}
