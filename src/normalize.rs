//! Input normalization
//!
//! ImageMagick writes non-finite statistics as bare `nan`, `inf` or the MSVC
//! spellings `1.#IND` / `1.#INF`, none of which are valid JSON. They are
//! rewritten to `null` textually before decoding.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Regex for non-finite number tokens following a key: `: -nan`, `: 1.#INF`, ...
static NON_FINITE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r": -?(?:1\.#IN[DF]|nan|inf)").unwrap());

/// Replacement for a matched non-finite token
const NULL_REPLACEMENT: &str = ": null";

/// Replace non-finite number tokens with `null`.
///
/// Matching is textual; the input is not parsed. Returns the input unchanged
/// (borrowed) when nothing matched.
pub fn normalize(input: &str) -> Cow<'_, str> {
    NON_FINITE_REGEX.replace_all(input, NULL_REPLACEMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r#"{"mean": nan}"#, r#"{"mean": null}"#; "nan")]
    #[test_case(r#"{"mean": -nan}"#, r#"{"mean": null}"#; "negative nan")]
    #[test_case(r#"{"max": inf}"#, r#"{"max": null}"#; "inf")]
    #[test_case(r#"{"min": -inf}"#, r#"{"min": null}"#; "negative inf")]
    #[test_case(r#"{"skew": 1.#IND}"#, r#"{"skew": null}"#; "msvc indeterminate")]
    #[test_case(r#"{"kurt": -1.#INF}"#, r#"{"kurt": null}"#; "msvc negative infinity")]
    fn test_normalize_tokens(input: &str, expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_normalize_untouched_input_is_borrowed() {
        let input = r#"[{"image": {"width": 10, "name": "nan.png"}}]"#;
        assert!(matches!(normalize(input), Cow::Borrowed(_)));
    }

    #[test]
    fn test_normalize_is_case_sensitive() {
        let input = r#"{"a": NaN, "b": Infinity}"#;
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_normalize_multiple_occurrences() {
        let input = r#"{"mean": nan, "std": -inf, "depth": 8}"#;
        assert_eq!(
            normalize(input),
            r#"{"mean": null, "std": null, "depth": 8}"#
        );
    }

    #[test]
    fn test_normalized_text_decodes() {
        let input = r#"[{"image": {"gamma": nan, "entropy": -inf}}]"#;
        let value: serde_json::Value = serde_json::from_str(&normalize(input)).unwrap();
        assert!(value[0]["image"]["gamma"].is_null());
        assert!(value[0]["image"]["entropy"].is_null());
    }
}
