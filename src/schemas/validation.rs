use crate::error::AgentError;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

const MAX_SCHEMA_ERRORS: usize = 3;

/// Validate tool call arguments against the tool's parameter schema
pub(crate) fn validate_arguments(
    tool_name: &str,
    schema: &Value,
    arguments: &Value,
) -> std::result::Result<(), AgentError> {
    let validator = JSONSchema::options()
        .with_draft(Draft::Draft7)
        .compile(schema)
        .map_err(|err| {
            AgentError::Validation(format!(
                "Failed to prepare `{}` schema for validation: {}",
                tool_name, err
            ))
        })?;

    if let Err(errors) = validator.validate(arguments) {
        let mut details = Vec::new();
        let mut truncated = false;

        for (idx, error) in errors.enumerate() {
            if idx < MAX_SCHEMA_ERRORS {
                let mut path = error.instance_path.to_string();
                if path.is_empty() {
                    path = "<root>".to_string();
                }
                details.push(format!("{}: {}", path, error));
            } else {
                truncated = true;
                break;
            }
        }

        let mut detail_str = if details.is_empty() {
            "arguments failed schema validation".to_string()
        } else {
            details.join("; ")
        };

        if truncated {
            detail_str.push_str("; additional errors truncated");
        }

        return Err(AgentError::Validation(format!(
            "Arguments for `{}` do not match its schema: {}",
            tool_name, detail_str
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn day_count_schema() -> Value {
        json!({
            "type": "object",
            "properties": {
                "dias": {"type": "integer"}
            },
            "required": ["dias"]
        })
    }

    #[test]
    fn test_valid_arguments_pass() {
        assert!(validate_arguments("tool", &day_count_schema(), &json!({"dias": 30})).is_ok());
    }

    #[test]
    fn test_missing_field_is_reported() {
        let err = validate_arguments("tool", &day_count_schema(), &json!({})).unwrap_err();
        assert_eq!(err.error_code(), "VALIDATION_ERROR");
        assert!(err.to_string().contains("dias"));
    }

    #[test]
    fn test_wrong_type_is_reported_with_path() {
        let err = validate_arguments("tool", &day_count_schema(), &json!({"dias": "trinta"}))
            .unwrap_err();
        assert!(err.to_string().contains("/dias"));
    }
}
