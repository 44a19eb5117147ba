use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::path::Path;
use std::time::Duration;

use crate::errors::ConfigError;
use crate::language_utils;
use crate::translation::TranslationRequest;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Target language code (ISO 639-1 or 639-3)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Columns to translate, in order
    #[serde(default)]
    pub columns: Vec<String>,

    /// Translation engine settings
    #[serde(default)]
    pub translation: TranslationSettings,

    /// Provider endpoint settings
    #[serde(default)]
    pub provider: ProviderSettings,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Settings for the chunked translation engine
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TranslationSettings {
    /// Maximum characters per translation request
    #[serde(default = "default_max_segment_length")]
    pub max_segment_length: usize,

    /// Attempts per segment, including the first
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,

    /// Delay in seconds between requests and between retry attempts
    /// (recommended range 0.5 to 5.0)
    #[serde(default = "default_request_delay_secs")]
    pub request_delay_secs: f64,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            max_segment_length: default_max_segment_length(),
            retry_count: default_retry_count(),
            request_delay_secs: default_request_delay_secs(),
        }
    }
}

/// Settings for the translation provider endpoint
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderSettings {
    /// Service endpoint URL
    #[serde(default = "default_provider_endpoint")]
    pub endpoint: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            endpoint: default_provider_endpoint(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_target_language() -> String {
    // The original tool translated into Japanese by default
    "ja".to_string()
}

fn default_max_segment_length() -> usize {
    4500
}

fn default_retry_count() -> u32 {
    3
}

fn default_request_delay_secs() -> f64 {
    1.0
}

fn default_provider_endpoint() -> String {
    crate::providers::google::DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_language: default_target_language(),
            columns: Vec::new(),
            translation: TranslationSettings::default(),
            provider: ProviderSettings::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Load configuration from a file if it exists, falling back to defaults
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {:?}", path))?;
        Ok(())
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), ConfigError> {
        language_utils::normalize_language_code(&self.target_language)
            .map_err(|_| ConfigError::InvalidLanguage(self.target_language.clone()))?;

        if self.translation.max_segment_length == 0 {
            return Err(ConfigError::InvalidSegmentLength);
        }
        if self.translation.retry_count == 0 {
            return Err(ConfigError::InvalidRetryCount);
        }
        // Rejects negative, NaN, and values too large for a Duration
        if Duration::try_from_secs_f64(self.translation.request_delay_secs).is_err() {
            return Err(ConfigError::InvalidDelay(
                self.translation.request_delay_secs,
            ));
        }

        Ok(())
    }

    /// Build the translation request described by this configuration.
    /// The target language is normalized to its ISO 639-1 form.
    pub fn translation_request(&self) -> Result<TranslationRequest, ConfigError> {
        self.validate()?;
        let language = language_utils::normalize_language_code(&self.target_language)
            .map_err(|_| ConfigError::InvalidLanguage(self.target_language.clone()))?;

        let delay = Duration::try_from_secs_f64(self.translation.request_delay_secs)
            .map_err(|_| ConfigError::InvalidDelay(self.translation.request_delay_secs))?;

        Ok(TranslationRequest::new(language)
            .max_segment_len(self.translation.max_segment_length)
            .max_attempts(self.translation.retry_count)
            .delay(delay))
    }
}
