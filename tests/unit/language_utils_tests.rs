/*!
 * Tests for language code utilities
 */

use colingo::language_utils::{column_suffix, get_language_name, normalize_language_code};

#[test]
fn test_normalizeLanguageCode_withPart1Code_shouldReturnLowercase() {
    assert_eq!(normalize_language_code("ja").unwrap(), "ja");
    assert_eq!(normalize_language_code(" EN ").unwrap(), "en");
}

#[test]
fn test_normalizeLanguageCode_withPart3Code_shouldNormalizeToPart1() {
    assert_eq!(normalize_language_code("jpn").unwrap(), "ja");
    assert_eq!(normalize_language_code("fra").unwrap(), "fr");
}

#[test]
fn test_normalizeLanguageCode_withInvalidCode_shouldFail() {
    assert!(normalize_language_code("zz").is_err());
    assert!(normalize_language_code("").is_err());
    assert!(normalize_language_code("english").is_err());
}

#[test]
fn test_getLanguageName_withValidCode_shouldReturnEnglishName() {
    assert_eq!(get_language_name("ja").unwrap(), "Japanese");
    assert_eq!(get_language_name("fr").unwrap(), "French");
}

#[test]
fn test_columnSuffix_shouldUppercaseNormalizedCode() {
    assert_eq!(column_suffix("ja"), "JA");
    assert_eq!(column_suffix("jpn"), "JA");
}
