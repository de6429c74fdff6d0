//! Legacy string encodings for structured parameters
//!
//! Tool parameters are stored as strings. Two shapes carry structure:
//!
//! - lists, comma separated: `h1,.article p,footer`
//! - pairs, comma separated `{key:value}` items: `{session:abc},{lang:en}`
//!
//! The lenient parsers never fail. Malformed items are dropped and logged
//! at debug level, and an input that yields nothing is reported as `None`
//! so factories can pass "absent" on to the tool. The `_strict` variants
//! reject the first malformed item instead.
//!
//! A few parameters hold a JSON object instead (HTTP headers, query
//! parameters); [`parse_json_object`] handles those the same lenient way.

use std::collections::BTreeMap;

/// A malformed item found by a strict parser.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("empty list entry at position {position}")]
    EmptyListEntry { position: usize },

    #[error("malformed pair '{item}', expected {{key:value}}")]
    MalformedPair { item: String },

    #[error("invalid JSON object: {message}")]
    InvalidJson { message: String },
}

/// Parse a comma-separated list, dropping blank entries.
pub fn parse_list(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect();
    (!items.is_empty()).then_some(items)
}

/// Parse a comma-separated list, rejecting blank entries.
pub fn parse_list_strict(raw: &str) -> Result<Option<Vec<String>>, EncodingError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    raw.split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, item)| {
            if item.is_empty() {
                Err(EncodingError::EmptyListEntry { position })
            } else {
                Ok(item.to_string())
            }
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

/// Parse `{key:value},{key:value}` pairs, dropping malformed items.
///
/// `"{a:1,bad}"` yields `{a: "1"}`.
pub fn parse_pairs(raw: &str) -> Option<BTreeMap<String, String>> {
    let mut pairs = BTreeMap::new();
    for item in raw.split(',') {
        match split_pair(item) {
            Some((key, value)) => {
                pairs.insert(key, value);
            }
            None if item.trim().is_empty() => {}
            None => tracing::debug!(item, "dropping malformed pair"),
        }
    }
    (!pairs.is_empty()).then_some(pairs)
}

/// Parse `{key:value},{key:value}` pairs, rejecting malformed items.
///
/// Unlike [`parse_pairs`], every item must be wrapped in braces.
pub fn parse_pairs_strict(raw: &str) -> Result<Option<BTreeMap<String, String>>, EncodingError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let mut pairs = BTreeMap::new();
    for item in raw.split(',') {
        let trimmed = item.trim();
        let braced = trimmed.starts_with('{') && trimmed.ends_with('}');
        match split_pair(trimmed) {
            Some((key, value)) if braced => {
                pairs.insert(key, value);
            }
            _ => {
                return Err(EncodingError::MalformedPair {
                    item: trimmed.to_string(),
                });
            }
        }
    }
    Ok(Some(pairs))
}

/// Strip braces and split on exactly one `:` into a non-empty key and a value.
fn split_pair(item: &str) -> Option<(String, String)> {
    let inner = item.trim().trim_matches(|c| c == '{' || c == '}');
    let mut parts = inner.split(':');
    let key = parts.next()?.trim();
    let value = parts.next()?.trim();
    if parts.next().is_some() || key.is_empty() {
        return None;
    }
    Some((key.to_string(), value.to_string()))
}

/// Parse a JSON object into string values, returning `None` on any error.
pub fn parse_json_object(raw: &str) -> Option<BTreeMap<String, String>> {
    match parse_json_object_strict(raw) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unparsable JSON object parameter");
            None
        }
    }
}

/// Parse a JSON object into string values.
///
/// Non-string values are kept in their JSON text form (`3`, `true`).
pub fn parse_json_object_strict(
    raw: &str,
) -> Result<Option<BTreeMap<String, String>>, EncodingError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| EncodingError::InvalidJson {
            message: e.to_string(),
        })?;
    let object = value.as_object().ok_or_else(|| EncodingError::InvalidJson {
        message: "expected an object".to_string(),
    })?;
    let map: BTreeMap<String, String> = object
        .iter()
        .map(|(k, v)| {
            let text = match v {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            (k.clone(), text)
        })
        .collect();
    Ok((!map.is_empty()).then_some(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[rstest]
    #[case("code,repo,pr", Some(vec!["code", "repo", "pr"]))]
    #[case(" h1 , .title p ", Some(vec!["h1", ".title p"]))]
    #[case("code,,issue,", Some(vec!["code", "issue"]))]
    #[case("", None)]
    #[case(" , ,", None)]
    fn test_parse_list(#[case] raw: &str, #[case] expected: Option<Vec<&str>>) {
        let expected = expected.map(|v| v.into_iter().map(String::from).collect::<Vec<_>>());
        assert_eq!(parse_list(raw), expected);
    }

    #[test]
    fn test_parse_list_strict() {
        assert_eq!(
            parse_list_strict("a, b").unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(parse_list_strict("  ").unwrap(), None);
        assert_eq!(
            parse_list_strict("a,,b").unwrap_err(),
            EncodingError::EmptyListEntry { position: 1 }
        );
    }

    #[test]
    fn test_parse_pairs_drops_malformed() {
        assert_eq!(parse_pairs("{a:1,bad}"), Some(map(&[("a", "1")])));
    }

    #[rstest]
    #[case("{session:abc},{lang:en}", &[("lang", "en"), ("session", "abc")])]
    #[case("{ key : value }", &[("key", "value")])]
    #[case("{a:}", &[("a", "")])]
    #[case("{a:1},{:2},{b:2:3},{c:3}", &[("a", "1"), ("c", "3")])]
    #[case("{a:1},{a:2}", &[("a", "2")])]
    fn test_parse_pairs(#[case] raw: &str, #[case] expected: &[(&str, &str)]) {
        assert_eq!(parse_pairs(raw), Some(map(expected)));
    }

    #[rstest]
    #[case("")]
    #[case("bad")]
    #[case("{nocolon},{}")]
    fn test_parse_pairs_nothing_usable(#[case] raw: &str) {
        assert_eq!(parse_pairs(raw), None);
    }

    #[test]
    fn test_parse_pairs_strict() {
        assert_eq!(
            parse_pairs_strict("{a:1},{b:2}").unwrap(),
            Some(map(&[("a", "1"), ("b", "2")]))
        );
        assert_eq!(parse_pairs_strict("").unwrap(), None);
        assert_eq!(
            parse_pairs_strict("{a:1,bad}").unwrap_err(),
            EncodingError::MalformedPair {
                item: "{a:1".to_string()
            }
        );
        assert!(parse_pairs_strict("a:1").is_err());
    }

    #[test]
    fn test_parse_json_object() {
        assert_eq!(
            parse_json_object(r#"{"Accept": "text/html", "retries": 3}"#),
            Some(map(&[("Accept", "text/html"), ("retries", "3")]))
        );
        assert_eq!(parse_json_object("{'Accept': 'x'}"), None);
        assert_eq!(parse_json_object("[1, 2]"), None);
        assert_eq!(parse_json_object("{}"), None);
        assert!(parse_json_object_strict("[1]").is_err());
    }

    proptest! {
        #[test]
        fn prop_parse_pairs_never_yields_bad_keys(raw in ".*") {
            if let Some(pairs) = parse_pairs(&raw) {
                prop_assert!(!pairs.is_empty());
                for key in pairs.keys() {
                    prop_assert!(!key.is_empty());
                    prop_assert!(!key.contains(':'));
                    prop_assert!(!key.contains(','));
                }
            }
        }

        #[test]
        fn prop_parse_list_entries_are_trimmed_and_non_empty(raw in "[a-z ,]{0,40}") {
            if let Some(items) = parse_list(&raw) {
                for item in items {
                    prop_assert!(!item.is_empty());
                    prop_assert_eq!(item.trim(), item.as_str());
                }
            }
        }

        #[test]
        fn prop_strict_pairs_agree_with_lenient_when_ok(raw in "[{}a-c:,]{0,30}") {
            if let Ok(Some(strict)) = parse_pairs_strict(&raw) {
                prop_assert_eq!(Some(strict), parse_pairs(&raw));
            }
        }
    }
}
