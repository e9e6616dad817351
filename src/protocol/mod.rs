pub mod request;
pub mod response;

pub use request::{
    ClientInfo, GetArgs, GetPromptParams, InitializeParams, JsonRpcRequest, ListArgs,
    ListPromptsParams, RpcId, SearchArgs, ToolCallParams,
};
pub use response::{
    GetPromptResult, JsonRpcError, JsonRpcResponse, ListPromptsResult, McpError, McpErrorCode,
    McpErrorResponse, PromptDescriptor, PromptMessage, ToolResult, ToolResultContent,
};
