use crate::error::{AgentError, Result};
use serde_json::{Map, Value};

/// Extract the tool call id, empty when the provider omitted it
pub(super) fn extract_tool_call_id(tool_call: &Value) -> &str {
    tool_call
        .get("id")
        .and_then(|value| value.as_str())
        .unwrap_or_default()
}

/// Extract the called function's name
pub(super) fn extract_function_name(tool_call: &Value) -> Option<&str> {
    tool_call
        .get("function")
        .and_then(|function| function.get("name"))
        .and_then(|value| value.as_str())
        .filter(|name| !name.is_empty())
}

/// Arguments as sent by the model, before parsing
pub(super) fn raw_arguments(tool_call: &Value) -> Value {
    tool_call
        .get("function")
        .and_then(|function| function.get("arguments"))
        .cloned()
        .unwrap_or(Value::Null)
}

/// Parse function arguments.
///
/// Accepts the usual JSON-encoded string, an already decoded object, and a
/// missing or blank value (treated as no arguments).
pub(super) fn parse_function_arguments(raw: &Value, function_name: &str) -> Result<Value> {
    match raw {
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Object(_) => Ok(raw.clone()),
        Value::String(encoded) if encoded.trim().is_empty() => Ok(Value::Object(Map::new())),
        Value::String(encoded) => serde_json::from_str(encoded).map_err(|err| {
            AgentError::InvalidFunctionCall(format!(
                "Failed to parse arguments for tool '{}': {}",
                function_name, err
            ))
        }),
        other => Err(AgentError::InvalidFunctionCall(format!(
            "Arguments for tool '{}' must be a JSON object, got {}",
            function_name, other
        ))),
    }
}

/// Text content of an assistant message, trimmed
pub(super) fn extract_message_text(message: &Value) -> String {
    match message.get("content") {
        Some(Value::String(text)) => text.trim().to_string(),
        Some(Value::Array(parts)) => parts
            .iter()
            .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
            .collect::<Vec<_>>()
            .join("")
            .trim()
            .to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_tool_call_fields() {
        let call = json!({
            "id": "call_1",
            "type": "function",
            "function": {
                "name": "converte_para_dias",
                "arguments": "{\"anos\":1,\"meses\":4,\"dias\":0}"
            }
        });

        assert_eq!(extract_tool_call_id(&call), "call_1");
        assert_eq!(extract_function_name(&call), Some("converte_para_dias"));

        let arguments = parse_function_arguments(&raw_arguments(&call), "converte_para_dias")
            .unwrap();
        assert_eq!(arguments["meses"], 4);
    }

    #[test]
    fn test_missing_fields() {
        let call = json!({"function": {"name": ""}});
        assert_eq!(extract_tool_call_id(&call), "");
        assert_eq!(extract_function_name(&call), None);
        assert_eq!(
            parse_function_arguments(&raw_arguments(&call), "x").unwrap(),
            json!({})
        );
    }

    #[test]
    fn test_invalid_arguments() {
        let err = parse_function_arguments(&json!("{not json"), "diferenca_entre_datas")
            .unwrap_err();
        assert_eq!(err.error_code(), "INVALID_FUNCTION_CALL");

        assert!(parse_function_arguments(&json!(42), "x").is_err());
    }

    #[test]
    fn test_message_text() {
        assert_eq!(extract_message_text(&json!({"content": "  Olá \n"})), "Olá");
        assert_eq!(
            extract_message_text(&json!({"content": [{"type": "text", "text": "a"}, {"type": "text", "text": "b"}]})),
            "ab"
        );
        assert_eq!(extract_message_text(&json!({"content": null})), "");
    }
}
