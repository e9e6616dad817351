use serde::{Deserialize, Serialize};

/// JSON-RPC 2.0 ID, either a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(i64),
    Str(String),
}

/// JSON-RPC 2.0 request envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<serde_json::Value>,
}

/// Arguments for the `list_prompts` and `list_rules` tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListArgs {
    #[serde(default)]
    pub cursor: Option<String>,
    /// Older hosts send the cursor under this name.
    #[serde(rename = "nextToken", default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl ListArgs {
    /// The cursor to forward: `cursor` wins over `nextToken`.
    pub fn cursor(&self) -> Option<String> {
        self.cursor.clone().or_else(|| self.next_token.clone())
    }

    /// The tag filter to forward. An empty list means no filter.
    pub fn tags(&self) -> Option<Vec<String>> {
        self.tags.clone().filter(|t| !t.is_empty())
    }
}

/// Arguments for the `search_prompts` tool.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchArgs {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub cursor: Option<String>,
    #[serde(rename = "nextToken", default)]
    pub next_token: Option<String>,
}

impl SearchArgs {
    pub fn cursor(&self) -> Option<String> {
        self.cursor.clone().or_else(|| self.next_token.clone())
    }
}

/// Arguments for the `get_prompt` and `get_rule` tools.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetArgs {
    #[serde(default)]
    pub name: Option<String>,
}

/// Parameters for `prompts/list`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListPromptsParams {
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Parameters for `prompts/get`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetPromptParams {
    pub name: String,
    /// Template arguments. Catalog prompts take none, so these are ignored.
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "protocolVersion")]
    pub protocol_version: Option<String>,
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Option<serde_json::Value>,
}
