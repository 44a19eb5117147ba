/*!
 * Mock provider implementations for testing
 *
 * This module provides a scripted provider that returns a predetermined
 * sequence of responses, so retry and pipeline behavior can be tested
 * without any external API calls.
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use colingo::errors::ProviderError;
use colingo::providers::TranslateProvider;

/// One scripted provider response
#[derive(Debug, Clone)]
pub enum ScriptedResponse {
    /// Succeed with the given text
    Ok(String),
    /// Fail with a request error carrying the given message
    Fail(String),
}

/// Provider that replays a fixed script of responses in order.
///
/// Once the script is exhausted every further call fails, which makes
/// unexpected extra calls visible in test assertions.
#[derive(Debug)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<ScriptedResponse>>,
    call_count: AtomicUsize,
}

impl ScriptedProvider {
    /// Create a provider that replays the given responses in order
    pub fn new(script: Vec<ScriptedResponse>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            call_count: AtomicUsize::new(0),
        }
    }

    /// Number of translate calls observed so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslateProvider for ScriptedProvider {
    async fn translate(
        &self,
        _text: &str,
        _target_language: &str,
    ) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(ScriptedResponse::Ok(text)) => Ok(text),
            Some(ScriptedResponse::Fail(message)) => Err(ProviderError::RequestFailed(message)),
            None => Err(ProviderError::RequestFailed(
                "scripted provider exhausted".to_string(),
            )),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}
