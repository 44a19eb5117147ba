/*!
 * Chunked, retrying translation engine.
 *
 * The translation module is structured as follows:
 * - segmenter: Splits text into provider-safe bounded segments
 * - retry: Bounded retry around a single provider call
 * - pipeline: Orchestrates segmentation and retry over values and batches
 */

pub mod pipeline;
pub mod retry;
pub mod segmenter;

pub use pipeline::{
    BatchResult, ColumnOutcome, TranslationOutcome, TranslationPipeline, TranslationRequest,
};
pub use retry::{SegmentResult, failure_marker, translate_segment};
pub use segmenter::{Segment, segment};
