/*!
 * # colingo - CSV column translation with a retrying chunked engine
 *
 * A Rust library and CLI for translating selected columns of tabular data
 * into a target language, cell by cell, tolerating transient failures of
 * the external translation provider.
 *
 * ## Features
 *
 * - Splits oversized cells into provider-safe segments (by code point)
 * - Bounded retry with a fixed inter-attempt delay per segment
 * - Failed segments become inline failure markers instead of aborting the batch
 * - Strictly sequential requests with a per-segment pause (provider courtesy)
 * - Per-run failure count and progress reporting
 * - Cooperative cancellation between values
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `table`: CSV-backed tabular data model
 * - `translation`: the chunked translation engine:
 *   - `translation::segmenter`: bounded-length text segmentation
 *   - `translation::retry`: retrying wrapper around one provider call
 *   - `translation::pipeline`: per-value and per-batch orchestration
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: translation provider clients:
 *   - `providers::google`: Google web endpoint client
 *   - `providers::mock`: configurable test provider
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod language_utils;
pub mod providers;
pub mod table;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, ConfigError, ProviderError, TableError};
pub use providers::TranslateProvider;
pub use table::{Column, Table};
pub use translation::{
    BatchResult, TranslationOutcome, TranslationPipeline, TranslationRequest,
};
