//! Lenient scalar decoding for spreadsheet-style rows.
//!
//! Source tables are hand-maintained, so a cell may arrive as a string, a
//! number, a boolean or null depending on the exporter.

use serde::de::{Deserialize, Deserializer, Error};
use serde_json::Value;

/// Convert a decoded cell into text. Null becomes `None`.
pub(crate) fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}

pub(crate) fn optional<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(scalar_to_string))
}

pub(crate) fn required<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    optional(deserializer)?.ok_or_else(|| D::Error::custom("expected a value, found null"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_become_text() {
        assert_eq!(scalar_to_string(json!("High")), Some("High".to_string()));
        assert_eq!(scalar_to_string(json!(7)), Some("7".to_string()));
        assert_eq!(scalar_to_string(json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(Value::Null), None);
    }
}
