//! Frozen JSON Schemas for tool payloads, and a validator to check
//! serialized output against them.

use jsonschema::validator_for;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum SchemaValidationError {
    #[error("Schema parse error: {0}")]
    SchemaParse(#[from] serde_json::Error),
    #[error("Schema compile error: {0}")]
    SchemaCompile(String),
    #[error("Instance validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

/// Shape of the text payload of `list_prompts` and `list_rules`, with the
/// array key (`prompts` or `rules`) filled in.
pub fn list_payload_schema(items_key: &str) -> Value {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": [items_key],
        "additionalProperties": false,
        "properties": {
            items_key: {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["name", "description", "tags"],
                    "additionalProperties": false,
                    "properties": {
                        "name": { "type": "string" },
                        "description": { "type": "string" },
                        "tags": { "type": "array", "items": { "type": "string" } },
                        "author": { "type": "string" }
                    }
                }
            },
            "nextCursor": { "type": "string", "minLength": 1 }
        }
    })
}

/// Shape of the text payload of `get_prompt`.
pub fn prompt_payload_schema() -> Value {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["name", "description", "tags", "howto"],
        "additionalProperties": false,
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "tags": { "type": "array", "items": { "type": "string" } },
            "author": { "type": "string" },
            "instruction": { "type": "string" },
            "howto": { "type": "string" }
        }
    })
}

/// Shape of the text payload of `get_rule`.
pub fn rule_payload_schema() -> Value {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["name", "description", "tags", "content"],
        "additionalProperties": false,
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "tags": { "type": "array", "items": { "type": "string" } },
            "author": { "type": "string" },
            "content": { "type": "string" }
        }
    })
}

/// Shape of the text of an `isError` tool result.
pub fn error_payload_schema() -> Value {
    serde_json::json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "type": "object",
        "required": ["error"],
        "additionalProperties": false,
        "properties": {
            "error": {
                "type": "object",
                "required": ["code", "message"],
                "additionalProperties": false,
                "properties": {
                    "code": {
                        "type": "string",
                        "enum": ["invalid_request", "not_found", "backend_failure", "internal_error"]
                    },
                    "message": { "type": "string", "minLength": 1 }
                }
            }
        }
    })
}

/// Validate a JSON instance against a JSON Schema (draft 2020-12).
pub fn validate_value(schema: &Value, instance: &Value) -> Result<(), SchemaValidationError> {
    let validator = validator_for(schema)
        .map_err(|e| SchemaValidationError::SchemaCompile(e.to_string()))?;

    let errors: Vec<String> = validator.iter_errors(instance).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(SchemaValidationError::ValidationFailed(errors))
    }
}

/// Same as [`validate_value`], for an instance that is still serialized text.
pub fn validate_text(schema: &Value, instance: &str) -> Result<(), SchemaValidationError> {
    let instance: Value = serde_json::from_str(instance)?;
    validate_value(schema, &instance)
}
