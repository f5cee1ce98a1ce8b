//! API response envelope and collection decoding
//!
//! The backend is not consistent about where a collection payload lives:
//! some endpoints return a bare array, others wrap it in `data`, `result`,
//! or a pluralized key. All of that shape probing is contained here so
//! call sites deal with one documented envelope and nothing else.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Unified API response structure
///
/// Well-behaved endpoints follow this format:
/// ```json
/// {
///     "code": 0,
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Numeric response code (0 or absent = success)
    #[serde(default)]
    pub code: Option<u16>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Response data (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            code: Some(0),
            message: Some("Success".to_string()),
            data: Some(data),
        }
    }

    /// Create an error response
    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Extract the collection array from a loosely-shaped response body.
///
/// Probes, in order: a bare top-level array, `data`, `result`, then the
/// first key holding an array value. Returns an empty vec when nothing
/// matches. A missing collection is an empty list, not an error.
pub fn decode_collection(body: &Value) -> Vec<Value> {
    if let Some(items) = body.as_array() {
        return items.clone();
    }

    if let Some(obj) = body.as_object() {
        for key in ["data", "result"] {
            if let Some(items) = obj.get(key).and_then(Value::as_array) {
                return items.clone();
            }
            // One level of nesting: { "data": { "orders": [...] } }
            if let Some(inner) = obj.get(key).and_then(Value::as_object) {
                if let Some(items) = inner.values().find_map(Value::as_array) {
                    return items.clone();
                }
            }
        }
        if let Some(items) = obj.values().find_map(Value::as_array) {
            return items.clone();
        }
    }

    Vec::new()
}

/// Decode a collection and deserialize each element into `T`.
///
/// Rows that fail to deserialize are skipped with a warning rather than
/// failing the whole list; one malformed record must not blank a screen.
pub fn parse_collection<T: DeserializeOwned>(body: &Value) -> Vec<T> {
    decode_collection(body)
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<T>(item) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!(error = %err, "skipping undecodable collection row");
                None
            }
        })
        .collect()
}

/// Extract the single-entity payload from a loosely-shaped response body.
///
/// Probes `data`, `result`, then falls back to the body itself.
pub fn decode_entity<T: DeserializeOwned>(body: &Value) -> Result<T, serde_json::Error> {
    let candidate = body
        .get("data")
        .or_else(|| body.get("result"))
        .unwrap_or(body);
    serde_json::from_value(candidate.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Row {
        id: String,
        name: String,
    }

    #[test]
    fn bare_array_is_decoded() {
        let body = json!([{"id": "1", "name": "a"}]);
        let rows: Vec<Row> = parse_collection(&body);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "a");
    }

    #[test]
    fn data_key_is_decoded() {
        let body = json!({"data": [{"id": "1", "name": "a"}, {"id": "2", "name": "b"}]});
        let rows: Vec<Row> = parse_collection(&body);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn result_key_is_decoded() {
        let body = json!({"result": [{"id": "1", "name": "a"}]});
        assert_eq!(parse_collection::<Row>(&body).len(), 1);
    }

    #[test]
    fn pluralized_key_is_decoded() {
        let body = json!({"success": true, "admins": [{"id": "1", "name": "a"}]});
        assert_eq!(parse_collection::<Row>(&body).len(), 1);
    }

    #[test]
    fn nested_data_object_is_probed() {
        let body = json!({"data": {"orders": [{"id": "1", "name": "a"}]}});
        assert_eq!(parse_collection::<Row>(&body).len(), 1);
    }

    #[test]
    fn missing_collection_is_empty_not_error() {
        let body = json!({"message": "no content"});
        assert!(decode_collection(&body).is_empty());
        let body = json!(null);
        assert!(decode_collection(&body).is_empty());
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let body = json!({"data": [{"id": "1", "name": "a"}, {"id": 7}]});
        let rows: Vec<Row> = parse_collection(&body);
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn entity_is_unwrapped_from_data() {
        let body = json!({"data": {"id": "9", "name": "z"}});
        let row: Row = decode_entity(&body).unwrap();
        assert_eq!(row.id, "9");
    }

    #[test]
    fn entity_falls_back_to_body() {
        let body = json!({"id": "9", "name": "z"});
        let row: Row = decode_entity(&body).unwrap();
        assert_eq!(row.name, "z");
    }
}
