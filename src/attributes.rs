//! Custom-attribute formatting for the RUM payload
//!
//! User-supplied key/value pairs ride to the browser inside the obfuscated
//! `extra` field as a single semicolon-delimited string. The format is a
//! fixed contract with the collector: scalar values only, a closed
//! three-character escaping table, and a `#` marker on non-string scalars.

use serde_json::{Map, Value};

/// Format custom attributes as a single `key=value;key=value` string.
///
/// Entries whose value is a composite (object or array) are dropped whole,
/// with no partial serialization and no error. An empty mapping, or one with
/// no scalar-valued entries, yields the empty string.
pub fn format_extra_data(attributes: &Map<String, Value>) -> String {
    attributes
        .iter()
        .filter_map(|(key, value)| {
            stringify_scalar(value)
                .map(|value| format!("{}={}", escape_extra_data(key), escape_extra_data(&value)))
        })
        .collect::<Vec<_>>()
        .join(";")
}

/// Render a scalar value for the attribute blob, or `None` for composites.
/// Non-string scalars carry a `#` type marker so the collector can tell the
/// string `"2"` from the number `2`.
fn stringify_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(format!("#{}", n)),
        Value::Bool(b) => Some(format!("#{}", b)),
        Value::Null => Some("#".to_string()),
        Value::Object(_) | Value::Array(_) => None,
    }
}

/// The escaping table is exactly these three replacements; downstream
/// consumers depend on the specific substitute characters.
fn escape_extra_data(value: &str) -> String {
    value.replace(';', ":").replace('=', "-").replace('"', "'")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn attrs(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_format() {
        let formatted = format_extra_data(&attrs(json!({"a": "1", "b": 2})));
        let segments: Vec<&str> = formatted.split(';').collect();
        assert!(segments.contains(&"a=1"));
        assert!(segments.contains(&"b=#2"));
    }

    #[test]
    fn test_format_escapes_semicolons() {
        let formatted = format_extra_data(&attrs(json!({"semi;colon": "gets;escaped"})));
        assert_eq!("semi:colon=gets:escaped", formatted);
    }

    #[test]
    fn test_format_escapes_equals() {
        let formatted = format_extra_data(&attrs(json!({"equal=key": "equal=value"})));
        assert_eq!("equal-key=equal-value", formatted);
    }

    #[test]
    fn test_format_escapes_quotes() {
        let formatted = format_extra_data(&attrs(json!({"\"quoted\"": "\"marks\""})));
        assert_eq!("'quoted'='marks'", formatted);
    }

    #[test]
    fn test_format_drops_nested_objects() {
        let formatted = format_extra_data(&attrs(json!({"nested": {"hashes?": "nope"}})));
        assert_eq!("", formatted);
    }

    #[test]
    fn test_format_drops_lists() {
        let formatted = format_extra_data(&attrs(json!({"lists": ["are", "they", "allowed?", "nope"]})));
        assert_eq!("", formatted);
    }

    #[test]
    fn test_format_drops_only_composite_entries() {
        let formatted = format_extra_data(&attrs(json!({"keep": "yes", "toss": [1, 2, 3]})));
        assert_eq!("keep=yes", formatted);
    }

    #[test]
    fn test_format_marks_non_string_scalars() {
        let formatted = format_extra_data(&attrs(json!({"b": true, "f": false, "n": null})));
        let segments: Vec<&str> = formatted.split(';').collect();
        assert!(segments.contains(&"b=#true"));
        assert!(segments.contains(&"f=#false"));
        assert!(segments.contains(&"n=#"));
    }

    #[test]
    fn test_format_empty_mapping() {
        assert_eq!("", format_extra_data(&Map::new()));
    }

    #[test]
    fn test_format_keeps_empty_string_values() {
        let formatted = format_extra_data(&attrs(json!({"k": ""})));
        assert_eq!("k=", formatted);
    }
}
