pub mod get_prompt;
pub mod get_rule;
pub mod list_prompts;
pub mod list_rules;
pub mod prompts;
pub mod search_prompts;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::PromptCatalog;
use crate::error::ToolError;
use crate::protocol::{
    GetPromptParams, InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse,
    ListPromptsParams, ToolCallParams, ToolResult,
};

/// Dispatch a JSON-RPC request to the appropriate handler.
///
/// Returns `None` for notifications (no response required).
pub async fn dispatch(
    req: &JsonRpcRequest,
    catalog: &dyn PromptCatalog,
) -> Option<JsonRpcResponse> {
    match req.method.as_str() {
        "initialize" => {
            if let Some(info) = req
                .params
                .clone()
                .and_then(|v| serde_json::from_value::<InitializeParams>(v).ok())
            {
                let client = info.client_info.and_then(|c| c.name);
                tracing::info!(
                    client = client.as_deref().unwrap_or("unknown"),
                    protocol = info.protocol_version.as_deref().unwrap_or("unspecified"),
                    "initialize"
                );
            }

            let result = serde_json::json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {
                    "tools": {},
                    "prompts": {}
                },
                "serverInfo": {
                    "name": "mcp-promptz-server",
                    "version": env!("CARGO_PKG_VERSION")
                }
            });
            Some(JsonRpcResponse::success(req.id.clone(), result))
        }

        "notifications/initialized" => None,

        "ping" => Some(JsonRpcResponse::success(req.id.clone(), serde_json::json!({}))),

        "tools/list" => Some(JsonRpcResponse::success(req.id.clone(), tool_definitions())),

        "tools/call" => {
            let params: ToolCallParams = match &req.params {
                Some(v) => match serde_json::from_value(v.clone()) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid tools/call params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for tools/call"),
                    ));
                }
            };

            let tool_result = dispatch_tool_call(&params, catalog).await;
            Some(to_response(req, &tool_result))
        }

        "prompts/list" => {
            let params: ListPromptsParams = match req.params.clone() {
                Some(Value::Null) | None => ListPromptsParams::default(),
                Some(v) => match serde_json::from_value(v) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid prompts/list params: {e}"
                            )),
                        ));
                    }
                },
            };

            match prompts::list(params, catalog).await {
                Ok(result) => Some(to_response(req, &result)),
                Err(err) => Some(error_response(req, "prompts/list", err)),
            }
        }

        "prompts/get" => {
            let params: GetPromptParams = match req.params.clone() {
                Some(v) => match serde_json::from_value(v) {
                    Ok(p) => p,
                    Err(e) => {
                        return Some(JsonRpcResponse::error(
                            req.id.clone(),
                            JsonRpcError::invalid_params(format!(
                                "Invalid prompts/get params: {e}"
                            )),
                        ));
                    }
                },
                None => {
                    return Some(JsonRpcResponse::error(
                        req.id.clone(),
                        JsonRpcError::invalid_params("Missing params for prompts/get"),
                    ));
                }
            };

            match prompts::get(params, catalog).await {
                Ok(result) => Some(to_response(req, &result)),
                Err(err) => Some(error_response(req, "prompts/get", err)),
            }
        }

        _ => Some(JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::method_not_found(&req.method),
        )),
    }
}

/// Run one tool. Handler errors become an `isError` result rather than a
/// JSON-RPC error, so the host shows them to the model.
pub async fn dispatch_tool_call(params: &ToolCallParams, catalog: &dyn PromptCatalog) -> ToolResult {
    let tool = params.name.as_str();

    let outcome = match tool {
        "list_prompts" => match parse_args(tool, &params.arguments) {
            Ok(args) => list_prompts::handle(args, catalog).await,
            Err(e) => Err(e),
        },
        "search_prompts" => match parse_args(tool, &params.arguments) {
            Ok(args) => search_prompts::handle(args, catalog).await,
            Err(e) => Err(e),
        },
        "get_prompt" => match parse_args(tool, &params.arguments) {
            Ok(args) => get_prompt::handle(args, catalog).await,
            Err(e) => Err(e),
        },
        "list_rules" => match parse_args(tool, &params.arguments) {
            Ok(args) => list_rules::handle(args, catalog).await,
            Err(e) => Err(e),
        },
        "get_rule" => match parse_args(tool, &params.arguments) {
            Ok(args) => get_rule::handle(args, catalog).await,
            Err(e) => Err(e),
        },
        _ => return ToolResult::error(format!("Unknown tool: {tool}")),
    };

    outcome.unwrap_or_else(|err| {
        tracing::error!(tool, "tool execution failed: {err}");
        err.into()
    })
}

/// Absent or null arguments fall back to the defaults, so a missing `name`
/// is reported by the handler itself.
fn parse_args<T: DeserializeOwned + Default>(
    tool: &str,
    arguments: &Option<Value>,
) -> Result<T, ToolError> {
    match arguments {
        None | Some(Value::Null) => Ok(T::default()),
        Some(v) => serde_json::from_value(v.clone()).map_err(|e| {
            ToolError::InvalidRequest(format!("Invalid arguments for {tool}: {e}"))
        }),
    }
}

fn to_response<T: serde::Serialize>(req: &JsonRpcRequest, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(v) => JsonRpcResponse::success(req.id.clone(), v),
        Err(e) => JsonRpcResponse::error(
            req.id.clone(),
            JsonRpcError::internal_error(format!("Serialization failed: {e}")),
        ),
    }
}

fn error_response(req: &JsonRpcRequest, method: &str, err: ToolError) -> JsonRpcResponse {
    tracing::error!(method, "request failed: {err}");
    JsonRpcResponse::error(req.id.clone(), err.into())
}

fn list_input_schema(kind: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": {
            "cursor": {
                "type": "string",
                "description": format!("Pagination cursor from a previous list_{kind} call")
            },
            "nextToken": {
                "type": "string",
                "description": "Alias for cursor"
            },
            "tags": {
                "type": "array",
                "items": { "type": "string" },
                "description": format!("Only return {kind} carrying at least one of these tags")
            }
        }
    })
}

fn search_input_schema() -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["query"],
        "properties": {
            "query": {
                "type": "string",
                "description": "Text to look for in prompt names and descriptions"
            },
            "cursor": {
                "type": "string",
                "description": "Pagination cursor from a previous search_prompts call"
            },
            "nextToken": {
                "type": "string",
                "description": "Alias for cursor"
            }
        }
    })
}

fn get_input_schema(kind: &str) -> Value {
    serde_json::json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": {
                "type": "string",
                "description": format!("Exact name of the {kind} to retrieve")
            }
        }
    })
}

/// The advertised tool set for `tools/list`.
pub fn tool_definitions() -> Value {
    serde_json::json!({
        "tools": [
            {
                "name": "list_prompts",
                "description": "List prompts from the catalog, optionally filtered by tags",
                "inputSchema": list_input_schema("prompts")
            },
            {
                "name": "search_prompts",
                "description": "Search prompts by text in their name or description",
                "inputSchema": search_input_schema()
            },
            {
                "name": "get_prompt",
                "description": "Get a prompt by name, including its instruction and usage notes",
                "inputSchema": get_input_schema("prompt")
            },
            {
                "name": "list_rules",
                "description": "List project rules from the catalog, optionally filtered by tags",
                "inputSchema": list_input_schema("rules")
            },
            {
                "name": "get_rule",
                "description": "Get a project rule by name, including its content",
                "inputSchema": get_input_schema("rule")
            }
        ]
    })
}
