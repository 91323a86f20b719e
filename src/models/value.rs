//! Normalization of CRM attribute values.
//!
//! Every record attribute arrives as a list of value entries. Over time the
//! CRM has grown several entry shapes (plain text, keyed objects, select
//! options, record references), so each entry is classified into an
//! [`AttributeValue`] and rendered down to a single display string.

use serde_json::Value;

/// Keys checked on object entries, highest priority first.
const KEYED_FIELDS: [&str; 4] = ["value", "full_name", "email_address", "phone_number"];

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A bare JSON scalar (or array) in the value list.
    Scalar(Value),
    /// Object carrying one of the direct keyed fields.
    Keyed { key: &'static str, value: Value },
    /// Select/status option: `{"option": {"title": ...}}`.
    OptionTitle(Value),
    /// Reference to another record: `{"target_record_id": ...}`.
    Reference(Value),
    /// Object of a shape we don't recognize.
    Unrecognized(Value),
}

impl AttributeValue {
    pub fn classify(entry: &Value) -> Self {
        let Some(obj) = entry.as_object() else {
            return AttributeValue::Scalar(entry.clone());
        };

        for key in KEYED_FIELDS {
            if let Some(value) = obj.get(key) {
                return AttributeValue::Keyed {
                    key,
                    value: value.clone(),
                };
            }
        }

        if let Some(title) = obj.get("option").and_then(|o| o.get("title")) {
            return AttributeValue::OptionTitle(title.clone());
        }

        if let Some(target) = obj.get("target_record_id") {
            return AttributeValue::Reference(target.clone());
        }

        AttributeValue::Unrecognized(entry.clone())
    }

    /// Render this entry as a display string.
    pub fn as_text(&self) -> String {
        match self {
            AttributeValue::Keyed { value, .. } => stringify(value),
            AttributeValue::OptionTitle(title) => stringify(title),
            AttributeValue::Reference(target) => stringify(target),
            AttributeValue::Scalar(raw) | AttributeValue::Unrecognized(raw) => {
                if is_falsy(raw) {
                    String::new()
                } else {
                    stringify(raw)
                }
            }
        }
    }
}

/// Extract a single display string from an attribute's value list.
///
/// Only the first entry is inspected. An empty list yields `""`.
pub fn extract(values: &[Value]) -> String {
    values
        .first()
        .map(|entry| AttributeValue::classify(entry).as_text())
        .unwrap_or_default()
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_empty_list() {
        assert_eq!(extract(&[]), "");
    }

    #[test]
    fn test_extract_keyed_priority() {
        // "value" outranks every other keyed field
        let entry = json!({"full_name": "Jane Doe", "value": "Acme Plant"});
        assert_eq!(extract(&[entry]), "Acme Plant");

        let entry = json!({"email_address": "jane@example.com", "full_name": "Jane Doe"});
        assert_eq!(extract(&[entry]), "Jane Doe");

        let entry = json!({"phone_number": "+12055550100"});
        assert_eq!(extract(&[entry]), "+12055550100");
    }

    #[test]
    fn test_extract_numeric_value_is_stringified() {
        assert_eq!(extract(&[json!({"value": 35203})]), "35203");
    }

    #[test]
    fn test_extract_option_title() {
        let entry = json!({"option": {"id": "opt-1", "title": "Active"}});
        assert_eq!(
            AttributeValue::classify(&entry),
            AttributeValue::OptionTitle(json!("Active"))
        );
        assert_eq!(extract(&[entry]), "Active");
    }

    #[test]
    fn test_extract_reference() {
        let entry = json!({"target_object": "people", "target_record_id": "person-123"});
        assert_eq!(extract(&[entry]), "person-123");
    }

    #[test]
    fn test_extract_only_first_entry() {
        let values = vec![json!({"value": "first"}), json!({"value": "second"})];
        assert_eq!(extract(&values), "first");
    }

    #[test]
    fn test_extract_scalars_and_fallbacks() {
        assert_eq!(extract(&[json!("Mobile")]), "Mobile");
        assert_eq!(extract(&[json!(42)]), "42");
        assert_eq!(extract(&[json!("")]), "");
        assert_eq!(extract(&[json!(null)]), "");
        assert_eq!(extract(&[json!({})]), "");

        // Unknown object shapes fall back to their JSON text
        assert_eq!(extract(&[json!({"foo": "bar"})]), r#"{"foo":"bar"}"#);
    }
}
