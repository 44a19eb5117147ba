use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for ISO language code handling
///
/// This module provides functions for validating and normalizing
/// ISO 639-1 (2-letter) and ISO 639-3 (3-letter) language codes to the
/// 2-letter form the translation endpoint expects.
/// Normalize a language code to ISO 639-1 (2-letter) format
pub fn normalize_language_code(code: &str) -> Result<String> {
    let normalized_code = code.trim().to_lowercase();

    let language = if normalized_code.len() == 2 {
        Language::from_639_1(&normalized_code)
    } else if normalized_code.len() == 3 {
        Language::from_639_3(&normalized_code)
    } else {
        None
    };

    let language = language.ok_or_else(|| anyhow!("Invalid language code: {}", code))?;

    language
        .to_639_1()
        .map(|part1| part1.to_string())
        .ok_or_else(|| anyhow!("No ISO 639-1 form for language code: {}", code))
}

/// Get the English name of a language from its code
pub fn get_language_name(code: &str) -> Result<String> {
    let normalized = normalize_language_code(code)?;
    let language = Language::from_639_1(&normalized)
        .ok_or_else(|| anyhow!("Invalid language code: {}", code))?;
    Ok(language.to_name().to_string())
}

/// Uppercase suffix used for output column naming (e.g. "ja" -> "JA").
/// Falls back to uppercasing the raw code if it cannot be normalized.
pub fn column_suffix(code: &str) -> String {
    normalize_language_code(code)
        .unwrap_or_else(|_| code.trim().to_string())
        .to_uppercase()
}
