//! Recovery of JSON arrays from free-form model replies.
//!
//! Models are asked for bare JSON but often wrap it in prose or code fences.
//! Extraction makes two ordered attempts and never fails loudly.

use serde_json::Value;
use tracing::debug;

/// Extracts a JSON array from a model reply.
///
/// The whole reply is parsed first. If it is valid JSON of any other shape
/// there is no array to recover. If it is not valid JSON, the span from the
/// first `[` to the last `]` is parsed instead.
pub fn extract_json_array(raw: &str) -> Option<Vec<Value>> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => return into_array(value),
        Err(err) => debug!(error = %err, "reply is not bare JSON, trying bracketed span"),
    }

    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end < start {
        return None;
    }

    serde_json::from_str::<Value>(&raw[start..=end])
        .ok()
        .and_then(into_array)
}

fn into_array(value: Value) -> Option<Vec<Value>> {
    match value {
        Value::Array(items) => Some(items),
        _ => None,
    }
}

/// Renders a JSON scalar the way a dynamic language would stringify it.
///
/// Strings are returned without quotes; everything else uses its JSON text.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parses_bare_array() {
        let raw = r#"[{"question":"Q1","options":["A","B","C","D"]}]"#;
        let parsed = extract_json_array(raw).unwrap();
        assert_eq!(
            parsed,
            vec![json!({"question": "Q1", "options": ["A", "B", "C", "D"]})]
        );
    }

    #[test]
    fn test_recovers_array_inside_prose() {
        let raw = r#"Here you go: [{"q":"A"}] thanks"#;
        assert_eq!(extract_json_array(raw), Some(vec![json!({"q": "A"})]));
    }

    #[test]
    fn test_recovers_array_inside_code_fence() {
        let raw = "```json\n[{\"q\": \"What is ATP?\", \"a\": \"Energy currency\"}]\n```";
        let parsed = extract_json_array(raw).unwrap();
        assert_eq!(parsed[0]["a"], "Energy currency");
    }

    #[test]
    fn test_no_brackets_is_none() {
        assert_eq!(extract_json_array("Sorry, I cannot help with that."), None);
        assert_eq!(extract_json_array(""), None);
    }

    #[test]
    fn test_invalid_json_inside_brackets_is_none() {
        assert_eq!(extract_json_array("Result: [not json at all]"), None);
        assert_eq!(extract_json_array("] backwards ["), None);
    }

    #[test]
    fn test_valid_non_array_is_none() {
        assert_eq!(extract_json_array(r#"{"questions": []}"#), None);
        assert_eq!(extract_json_array("42"), None);
    }

    #[test]
    fn test_value_to_text() {
        assert_eq!(value_to_text(&json!("plain")), "plain");
        assert_eq!(value_to_text(&json!(42)), "42");
        assert_eq!(value_to_text(&json!(true)), "true");
        assert_eq!(value_to_text(&json!(null)), "null");
    }
}
