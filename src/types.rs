use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Logical collection every log document is written to and searched in.
pub const LOGS_COLLECTION: &str = "logs";

/// The only field whose filter value is a `[start, end]` pair.
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// One caller-supplied search predicate.
///
/// The operator is implied by the field: `timestamp` filters are inclusive
/// ranges, every other field is a phrase match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub value: FilterValue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    /// `[start, end]` for timestamps. Bounds may be strings, numbers or null.
    List(Vec<Value>),
    /// Any other JSON (number, object, null, absent). Never translatable.
    Other(Value),
}

impl Default for FilterValue {
    fn default() -> Self {
        FilterValue::Other(Value::Null)
    }
}

impl Filter {
    pub fn text(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter {
            field: field.into(),
            value: FilterValue::Text(value.into()),
        }
    }

    pub fn timestamp_range(start: Option<&str>, end: Option<&str>) -> Self {
        let bound = |b: Option<&str>| b.map(|s| Value::String(s.to_string())).unwrap_or(Value::Null);
        Filter {
            field: TIMESTAMP_FIELD.to_string(),
            value: FilterValue::List(vec![bound(start), bound(end)]),
        }
    }

    /// A filter is structurally valid when it names a field.
    pub fn is_valid(&self) -> bool {
        !self.field.is_empty()
    }

    pub fn is_timestamp(&self) -> bool {
        self.field == TIMESTAMP_FIELD
    }
}

impl FilterValue {
    /// Single-string view of the value.
    ///
    /// The search form resets a filter to `[""]` when its field is changed,
    /// so a one-element list holding a string reads as that string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s.as_str()),
            FilterValue::List(items) => match items.as_slice() {
                [Value::String(s)] => Some(s.as_str()),
                _ => None,
            },
            FilterValue::Other(_) => None,
        }
    }

    /// Range bound at `idx`, with null, `""` and missing entries read as open.
    pub fn bound(&self, idx: usize) -> Option<&Value> {
        match self {
            FilterValue::Text(_) | FilterValue::Other(_) => None,
            FilterValue::List(items) => items.get(idx).filter(|v| match v {
                Value::Null => false,
                Value::String(s) => !s.is_empty(),
                _ => true,
            }),
        }
    }
}

/// An incoming log entry. Opaque to this crate and forwarded verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogDocument(pub Map<String, Value>);

impl LogDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        LogDocument(fields)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for LogDocument {
    fn from(fields: Map<String, Value>) -> Self {
        LogDocument(fields)
    }
}

/// One match as reported by the log store (`_id`, `_source`, `_score`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hit(pub Map<String, Value>);

impl Hit {
    pub fn id(&self) -> Option<&str> {
        self.0.get("_id").and_then(Value::as_str)
    }

    pub fn source(&self) -> Option<&Value> {
        self.0.get("_source")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_deserializes_text_and_range() {
        let text: Filter = serde_json::from_value(json!({"field": "level", "value": "ERROR"})).unwrap();
        assert_eq!(text, Filter::text("level", "ERROR"));

        let range: Filter = serde_json::from_value(json!({
            "field": "timestamp",
            "value": ["2023-09-10T00:00:00Z", null]
        }))
        .unwrap();
        assert!(range.is_timestamp());
        assert_eq!(range.value.bound(0), Some(&json!("2023-09-10T00:00:00Z")));
        assert_eq!(range.value.bound(1), None);
    }

    #[test]
    fn test_bound_treats_empty_and_missing_as_open() {
        let value = FilterValue::List(vec![json!("")]);
        assert_eq!(value.bound(0), None);
        assert_eq!(value.bound(1), None);

        let value = FilterValue::List(vec![json!(1694304000000_i64), json!("2023-09-15")]);
        assert_eq!(value.bound(0), Some(&json!(1694304000000_i64)));
        assert_eq!(value.bound(1), Some(&json!("2023-09-15")));
    }

    #[test]
    fn test_as_text_accepts_reset_form_value() {
        assert_eq!(FilterValue::Text("boot".into()).as_text(), Some("boot"));
        assert_eq!(FilterValue::List(vec![json!("")]).as_text(), Some(""));
        assert_eq!(FilterValue::List(vec![json!("a"), json!("b")]).as_text(), None);
        assert_eq!(FilterValue::List(vec![json!(3)]).as_text(), None);
    }

    #[test]
    fn test_filter_validity() {
        assert!(Filter::text("message", "").is_valid());
        assert!(!Filter::text("", "ERROR").is_valid());
    }

    #[test]
    fn test_hit_accessors_and_passthrough() {
        let raw = json!({"_index": "logs", "_id": "abc", "_score": 1.2, "_source": {"level": "INFO"}});
        let hit: Hit = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(hit.id(), Some("abc"));
        assert_eq!(hit.source(), Some(&json!({"level": "INFO"})));
        assert_eq!(serde_json::to_value(&hit).unwrap(), raw);
    }

    #[test]
    fn test_unexpected_value_shapes_still_deserialize() {
        for value in [json!(5), json!(null), json!({"a": 1}), json!(true)] {
            let filter: Filter =
                serde_json::from_value(json!({"field": "level", "value": value.clone()})).unwrap();
            assert_eq!(filter.value, FilterValue::Other(value));
            assert_eq!(filter.value.as_text(), None);
            assert_eq!(filter.value.bound(0), None);
        }

        let missing: Filter = serde_json::from_value(json!({"field": "level"})).unwrap();
        assert_eq!(missing.value, FilterValue::Other(Value::Null));

        let no_field: Filter = serde_json::from_value(json!({"value": "x"})).unwrap();
        assert!(!no_field.is_valid());
    }
}
