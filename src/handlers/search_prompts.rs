use crate::backend::PromptCatalog;
use crate::error::ToolError;
use crate::protocol::{SearchArgs, ToolResult};

use super::list_prompts;

/// Handle a `search_prompts` tool call.
///
/// The result has the same shape as `list_prompts`. A blank query is
/// rejected before the catalog is queried.
pub async fn handle(args: SearchArgs, catalog: &dyn PromptCatalog) -> Result<ToolResult, ToolError> {
    let cursor = args.cursor();
    let query = args
        .query
        .map(|q| q.trim().to_string())
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ToolError::InvalidRequest("Search query is required".into()))?;

    let page = catalog.search_prompts(&query, cursor).await?;
    list_prompts::render(page)
}
