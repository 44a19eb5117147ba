/*!
 * Mock provider implementations for testing.
 *
 * This module provides mock providers that simulate different behaviors:
 * - `MockProvider::working()` - Always succeeds with translated text
 * - `MockProvider::flaky(n)` - Fails the first n calls, then succeeds
 * - `MockProvider::intermittent(n)` - Fails every nth request
 * - `MockProvider::failing(msg)` - Always fails with the given message
 */

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::errors::ProviderError;
use crate::providers::TranslateProvider;

/// Behavior mode for the mock provider
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always succeeds with a tagged translation
    Working,
    /// Fails the first `failures` calls, then succeeds
    Flaky {
        /// Number of leading calls that fail
        failures: usize,
    },
    /// Fails intermittently (every nth request)
    Intermittent {
        /// Every nth request fails
        fail_every: usize,
    },
    /// Always fails with the given message
    Failing {
        /// Error message returned on every call
        message: String,
    },
}

/// Mock provider for testing translation behavior
#[derive(Debug)]
pub struct MockProvider {
    /// Behavior mode
    behavior: MockBehavior,
    /// Total number of translate calls, shared across clones
    call_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&str, &str) -> String>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock provider that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that fails the first `failures` calls, then succeeds
    pub fn flaky(failures: usize) -> Self {
        Self::new(MockBehavior::Flaky { failures })
    }

    /// Create an intermittently failing mock provider.
    /// A `fail_every` of zero is clamped to 1, which fails every call.
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a failing mock provider that always errors
    pub fn failing(message: impl Into<String>) -> Self {
        Self::new(MockBehavior::Failing {
            message: message.into(),
        })
    }

    /// Set a custom response generator, invoked as (text, target_language)
    pub fn with_custom_response(mut self, generator: fn(&str, &str) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Total number of translate calls observed so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn respond(&self, text: &str, target_language: &str) -> String {
        if let Some(generator) = self.custom_response {
            generator(text, target_language)
        } else {
            format!("[{}] {}", target_language, text)
        }
    }
}

impl Clone for MockProvider {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior.clone(),
            call_count: Arc::clone(&self.call_count),
            custom_response: self.custom_response,
        }
    }
}

#[async_trait]
impl TranslateProvider for MockProvider {
    async fn translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst);

        match &self.behavior {
            MockBehavior::Working => Ok(self.respond(text, target_language)),

            MockBehavior::Flaky { failures } => {
                if count < *failures {
                    Err(ProviderError::RequestFailed(format!(
                        "simulated transient failure (call #{})",
                        count + 1
                    )))
                } else {
                    Ok(self.respond(text, target_language))
                }
            }

            MockBehavior::Intermittent { fail_every } => {
                let fail_every = (*fail_every).max(1);
                if count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("simulated intermittent failure (call #{})", count + 1),
                    })
                } else {
                    Ok(self.respond(text, target_language))
                }
            }

            MockBehavior::Failing { message } => {
                Err(ProviderError::RequestFailed(message.clone()))
            }
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
