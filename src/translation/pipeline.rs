/*!
 * Chunked translation pipeline.
 *
 * Orchestrates the segmenter and the retrying translator over one text
 * value, and over a batch of column values. Execution is strictly
 * sequential: the external provider rate-limits concurrent bursts, so
 * requests are issued one at a time with a timed pause after each segment.
 *
 * Individual item failures are data, not batch failure: every input value
 * produces exactly one outcome, in input order, and the batch always
 * completes unless the caller cancels it or the request fails validation
 * up front.
 */

use log::debug;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::errors::ConfigError;
use crate::providers::TranslateProvider;
use crate::table::Column;

use super::retry::translate_segment;
use super::segmenter::segment;

/// Default maximum segment length in code points
pub const DEFAULT_MAX_SEGMENT_LEN: usize = 4500;

/// Default number of attempts per segment
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default delay between requests and between retry attempts
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Immutable parameters for one translation run
#[derive(Debug, Clone)]
pub struct TranslationRequest {
    /// Target language code (ISO 639-1)
    pub target_language: String,

    /// Maximum segment length in code points
    pub max_segment_len: usize,

    /// Maximum attempts per segment, including the first
    pub max_attempts: u32,

    /// Delay between retry attempts and after each segment
    pub delay: Duration,
}

impl TranslationRequest {
    /// Create a request for the given target language with default limits
    pub fn new(target_language: impl Into<String>) -> Self {
        Self {
            target_language: target_language.into(),
            max_segment_len: DEFAULT_MAX_SEGMENT_LEN,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            delay: DEFAULT_DELAY,
        }
    }

    /// Set the maximum segment length
    pub fn max_segment_len(mut self, max_segment_len: usize) -> Self {
        self.max_segment_len = max_segment_len;
        self
    }

    /// Set the number of attempts per segment
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Set the inter-request delay
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Validate the request before any translation work begins
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_language.trim().is_empty() {
            return Err(ConfigError::InvalidLanguage(self.target_language.clone()));
        }
        if self.max_segment_len == 0 {
            return Err(ConfigError::InvalidSegmentLength);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::InvalidRetryCount);
        }
        Ok(())
    }
}

/// The rejoined translation for one input value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    /// Concatenation of all segment outputs, in segment order
    pub text: String,

    /// True iff at least one segment exhausted its retries
    pub had_failure: bool,
}

/// Outcomes for one translated column, in row order
#[derive(Debug, Clone)]
pub struct ColumnOutcome {
    /// Name of the source column
    pub name: String,

    /// One outcome per input value, preserving row order
    pub outcomes: Vec<TranslationOutcome>,
}

/// Result of a whole batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// Per-column outcomes, in selection order
    pub columns: Vec<ColumnOutcome>,

    /// Number of outcomes across all columns with `had_failure = true`
    pub failure_count: usize,

    /// True if the run was cancelled; completed outcomes remain valid
    pub cancelled: bool,
}

/// Pipeline driving segmentation and retrying translation over a batch.
///
/// Holds no mutable state beyond the in-flight batch's accumulators; a new
/// batch is an independent run.
pub struct TranslationPipeline<'a> {
    provider: &'a dyn TranslateProvider,
}

impl<'a> TranslationPipeline<'a> {
    /// Create a pipeline backed by the given provider
    pub fn new(provider: &'a dyn TranslateProvider) -> Self {
        Self { provider }
    }

    /// Translate a single text value.
    ///
    /// Empty text yields an empty, non-failed outcome without any provider
    /// call. Otherwise each segment is translated with bounded retry and
    /// the outputs are rejoined in order; failed segments contribute their
    /// failure marker instead of aborting the value.
    pub async fn translate_value(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> Result<TranslationOutcome, ConfigError> {
        request.validate()?;
        Ok(self.translate_value_inner(text, request).await)
    }

    async fn translate_value_inner(
        &self,
        text: &str,
        request: &TranslationRequest,
    ) -> TranslationOutcome {
        let segments = segment(text, request.max_segment_len);
        if segments.is_empty() {
            return TranslationOutcome {
                text: String::new(),
                had_failure: false,
            };
        }

        let mut translated = String::new();
        let mut had_failure = false;

        for seg in segments {
            let result = translate_segment(
                self.provider,
                &seg.text,
                &request.target_language,
                request.max_attempts,
                request.delay,
            )
            .await;

            had_failure |= result.is_failed();
            translated.push_str(&result.into_text());

            // Pause after every segment regardless of outcome to stay
            // under the provider's rate limits.
            tokio::time::sleep(request.delay).await;
        }

        TranslationOutcome {
            text: translated,
            had_failure,
        }
    }

    /// Translate a batch of columns, column-major.
    ///
    /// `on_progress(completed, total)` is invoked after every value, with
    /// `total` the sum of row counts across columns; it is purely an
    /// observer and never affects outcomes. The cancellation flag is polled
    /// before each value; on cancellation the completed outcomes are
    /// returned with `cancelled = true`.
    pub async fn translate_batch<F>(
        &self,
        columns: &[Column],
        request: &TranslationRequest,
        cancel: &AtomicBool,
        mut on_progress: F,
    ) -> Result<BatchResult, ConfigError>
    where
        F: FnMut(usize, usize),
    {
        request.validate()?;
        if columns.is_empty() {
            return Err(ConfigError::EmptyColumnSelection);
        }

        let total: usize = columns.iter().map(|c| c.values.len()).sum();
        let mut completed = 0;
        let mut failure_count = 0;
        let mut results = Vec::with_capacity(columns.len());
        let mut cancelled = false;

        'columns: for column in columns {
            let mut outcomes = Vec::with_capacity(column.values.len());

            for value in &column.values {
                if cancel.load(Ordering::SeqCst) {
                    cancelled = true;
                    results.push(ColumnOutcome {
                        name: column.name.clone(),
                        outcomes,
                    });
                    break 'columns;
                }

                let outcome = self.translate_value_inner(value, request).await;
                if outcome.had_failure {
                    failure_count += 1;
                }
                outcomes.push(outcome);

                completed += 1;
                on_progress(completed, total);
                debug!(
                    "translated value {}/{} in column '{}'",
                    completed, total, column.name
                );
            }

            results.push(ColumnOutcome {
                name: column.name.clone(),
                outcomes,
            });
        }

        Ok(BatchResult {
            columns: results,
            failure_count,
            cancelled,
        })
    }
}
