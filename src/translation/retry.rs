/*!
 * Retrying wrapper around a single provider call.
 *
 * One bad segment must not abort the batch: this layer converts every
 * provider failure into a `SegmentResult`, never an error. After retries
 * are exhausted the failure is embedded into the output text as a bracketed
 * marker so downstream concatenation always produces a parallel-shaped
 * table with no missing cells.
 */

use log::{error, warn};
use std::time::Duration;

use crate::providers::TranslateProvider;

/// Outcome of translating one segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SegmentResult {
    /// The provider returned a translation
    Translated(String),

    /// All attempts failed; carries the final error description
    Failed(String),
}

impl SegmentResult {
    /// Whether this segment exhausted its retries
    pub fn is_failed(&self) -> bool {
        matches!(self, SegmentResult::Failed(_))
    }

    /// Render the result as output text. A failed segment becomes an
    /// unambiguous human-readable marker embedding the failure reason.
    pub fn into_text(self) -> String {
        match self {
            SegmentResult::Translated(text) => text,
            SegmentResult::Failed(description) => failure_marker(&description),
        }
    }
}

/// Build the textual placeholder embedded in place of a failed segment
pub fn failure_marker(description: &str) -> String {
    format!("[translation failed: {}]", description)
}

/// Translate one segment with bounded retry and a fixed inter-attempt delay.
///
/// Attempts the provider up to `max_attempts` times, waiting `delay` between
/// failed attempts. Success returns immediately. This function never
/// propagates the provider's failure: the final error is returned as the
/// `Failed` variant.
pub async fn translate_segment(
    provider: &dyn TranslateProvider,
    text: &str,
    target_language: &str,
    max_attempts: u32,
    delay: Duration,
) -> SegmentResult {
    debug_assert!(max_attempts > 0, "attempt count must be positive");

    let mut attempt = 1;
    loop {
        match provider.translate(text, target_language).await {
            Ok(translated) => return SegmentResult::Translated(translated),
            Err(e) if attempt < max_attempts => {
                warn!(
                    "{} translation attempt {}/{} failed: {}",
                    provider.name(),
                    attempt,
                    max_attempts,
                    e
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!(
                    "{} translation failed after {} attempts: {}",
                    provider.name(),
                    max_attempts,
                    e
                );
                return SegmentResult::Failed(e.to_string());
            }
        }
    }
}
