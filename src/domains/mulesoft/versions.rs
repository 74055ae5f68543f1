//! Version-string helpers shared by every scraper.

use regex::Regex;
use std::cmp::Ordering;
use std::sync::LazyLock;

static VERSION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+").expect("valid regex"));

static VERSION_MENTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[Vv]ersion\s*)?(\d+\.\d+(?:\.\d+)?)").expect("valid regex")
});

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// True if the trimmed text starts with `<int>.<int>`.
///
/// Plain integers and labels such as `"Edge"` are rejected.
pub fn is_version_like(text: &str) -> bool {
    VERSION_PREFIX.is_match(text.trim())
}

/// True if a version number appears anywhere in the text.
pub fn contains_version(text: &str) -> bool {
    VERSION_MENTION.is_match(text)
}

/// Extract the first version number from free text.
///
/// A leading `version`/`Version` word is dropped, so
/// `"DataWeave Version 2.10.0 Release Notes"` yields `"2.10.0"`.
/// Returns an empty string when nothing matches.
pub fn extract_version_number(text: &str) -> String {
    VERSION_MENTION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// All version mentions in the text, in order of appearance.
pub fn find_version_mentions(text: &str) -> Vec<String> {
    VERSION_MENTION
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Parse a human-readable JDK list such as `"8, 11, and 17"`.
///
/// Numbers keep their order of appearance; no sorting or deduplication.
/// A digit run too large for `u64` saturates to `u64::MAX` instead of being
/// dropped.
pub fn parse_jdk_versions(text: &str) -> Vec<u64> {
    if text.is_empty() {
        return Vec::new();
    }

    let normalized = text.replace("and", ",");
    DIGIT_RUN
        .find_iter(normalized.trim())
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .collect()
}

/// Component-wise numeric sort key for a dotted version.
///
/// Anything without a dot, or with a non-numeric component, sorts as `[0]`.
pub fn version_sort_key(version: &str) -> Vec<u64> {
    if !version.contains('.') {
        return vec![0];
    }

    version
        .split('.')
        .map(|part| part.trim().parse::<u64>())
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|_| vec![0])
}

/// Compare two versions by their [`version_sort_key`].
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    version_sort_key(a).cmp(&version_sort_key(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_jdk_versions_list_with_and() {
        assert_eq!(parse_jdk_versions("8, 11, and 17"), vec![8, 11, 17]);
        assert_eq!(parse_jdk_versions("8 and 11"), vec![8, 11]);
    }

    #[test]
    fn test_parse_jdk_versions_empty() {
        assert!(parse_jdk_versions("").is_empty());
        assert!(parse_jdk_versions("   ").is_empty());
        assert!(parse_jdk_versions("not supported").is_empty());
    }

    #[test]
    fn test_parse_jdk_versions_keeps_order() {
        assert_eq!(parse_jdk_versions("17, 8"), vec![17, 8]);
        assert_eq!(parse_jdk_versions("OpenJDK 17, 21"), vec![17, 21]);
    }

    #[test]
    fn test_parse_jdk_versions_keeps_oversized_numbers() {
        assert_eq!(parse_jdk_versions("8, 4294967296"), vec![8, 4_294_967_296]);
        assert_eq!(
            parse_jdk_versions("17 and 99999999999999999999999"),
            vec![17, u64::MAX]
        );
    }

    #[test]
    fn test_is_version_like() {
        assert!(is_version_like("4.4.0"));
        assert!(is_version_like("  4.9.0 Edge"));
        assert!(is_version_like("2.10"));
        assert!(!is_version_like("Edge"));
        assert!(!is_version_like("4"));
        assert!(!is_version_like("Mule 4.4"));
        assert!(!is_version_like(""));
    }

    #[test]
    fn test_extract_version_number() {
        assert_eq!(
            extract_version_number("DataWeave Version 2.10.0 Release Notes"),
            "2.10.0"
        );
        assert_eq!(extract_version_number("version 1.2"), "1.2");
        assert_eq!(extract_version_number("1.10.3 - March 2024"), "1.10.3");
        assert_eq!(extract_version_number("no version here"), "");
    }

    #[test]
    fn test_contains_version() {
        assert!(contains_version("HTTP Connector 1.10.3"));
        assert!(!contains_version("Compatibility"));
    }

    #[test]
    fn test_find_version_mentions() {
        let found = find_version_mentions("Upgrade from 1.2 to Version 1.3.1 now");
        assert_eq!(found, vec!["1.2".to_string(), "Version 1.3.1".to_string()]);
    }

    #[test]
    fn test_version_sort_key() {
        assert_eq!(version_sort_key("4.10.0"), vec![4, 10, 0]);
        assert_eq!(version_sort_key("4"), vec![0]);
        assert_eq!(version_sort_key("4.x"), vec![0]);
        assert_eq!(compare_versions("4.10.0", "4.9.0"), Ordering::Greater);
        assert_eq!(compare_versions("4.4", "4.4.0"), Ordering::Less);
    }
}
