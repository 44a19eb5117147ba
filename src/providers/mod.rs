/*!
 * Provider implementations for translation services.
 *
 * This module contains client implementations for translation providers:
 * - Google: the public web translation endpoint
 * - Mock: configurable in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Common trait for all translation providers.
///
/// This is the only I/O boundary of the translation core: a provider
/// accepts a text segment and a destination language code and either
/// returns the translated text or fails with a `ProviderError`. Retry
/// lives above this seam, never inside an implementation.
#[async_trait]
pub trait TranslateProvider: Send + Sync + Debug {
    /// Translate one text segment into the target language
    async fn translate(&self, text: &str, target_language: &str)
    -> Result<String, ProviderError>;

    /// Short provider name for logging
    fn name(&self) -> &'static str;
}

pub mod google;
pub mod mock;
