//! Transport-independent form of an inbound tool call.

use serde::Deserialize;
use serde_json::{Map, Value};

/// String-keyed arguments exactly as the caller sent them.
pub type ArgumentMap = Map<String, Value>;

/// Tool name plus arguments, decoded from whichever transport carried the call.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ToolCallEnvelope {
    pub name: String,
    #[serde(default, deserialize_with = "arguments_or_empty")]
    pub arguments: ArgumentMap,
}

impl ToolCallEnvelope {
    pub fn new(name: impl Into<String>, arguments: ArgumentMap) -> Self {
        Self {
            name: name.into(),
            arguments,
        }
    }

    /// Decode a `{name, arguments}` object. A missing or `null` `arguments` is empty.
    pub fn from_value(value: Value) -> Result<Self, String> {
        let envelope: Self = serde_json::from_value(value)
            .map_err(|err| format!("expected {{\"name\": string, \"arguments\": object}}: {err}"))?;
        if envelope.name.trim().is_empty() {
            return Err("tool name must not be empty".to_string());
        }
        Ok(envelope)
    }
}

fn arguments_or_empty<'de, D>(deserializer: D) -> Result<ArgumentMap, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ArgumentMap>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decodes_name_and_arguments() {
        let envelope =
            ToolCallEnvelope::from_value(json!({"name": "search_posts", "arguments": {"page": 2}}))
                .unwrap();
        assert_eq!(envelope.name, "search_posts");
        assert_eq!(envelope.arguments.get("page"), Some(&json!(2)));
    }

    #[test]
    fn test_null_arguments_are_empty() {
        let envelope =
            ToolCallEnvelope::from_value(json!({"name": "search_posts", "arguments": null})).unwrap();
        assert!(envelope.arguments.is_empty());
    }

    #[test]
    fn test_rejects_non_object_arguments() {
        let err = ToolCallEnvelope::from_value(json!({"name": "x", "arguments": [1, 2]}));
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_missing_or_blank_name() {
        assert!(ToolCallEnvelope::from_value(json!({"arguments": {}})).is_err());
        assert!(ToolCallEnvelope::from_value(json!({"name": "  "})).is_err());
    }
}
